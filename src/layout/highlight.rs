use super::segment::StyledSegment;
use super::style::SegmentStyle;
use std::ops::Range;

/// Locale-independent simple case fold. Characters whose lowercase form
/// expands to several characters fold to themselves so that folded text
/// keeps a one-to-one character mapping with the original.
///
/// Single-character lowercasing leaves a few letters apart that simple
/// folding merges (final sigma, long s, the Greek symbol variants); those
/// are mapped onto their ordinary form.
pub fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    let folded = match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    };
    match folded {
        'ς' => 'σ',
        'ϐ' => 'β',
        'ϑ' => 'θ',
        'ϕ' => 'φ',
        'ϖ' => 'π',
        'ϰ' => 'κ',
        'ϱ' => 'ρ',
        'ϵ' => 'ε',
        '\u{345}' | '\u{1fbe}' => 'ι',
        'ſ' => 's',
        'ẛ' => 'ṡ',
        other => other,
    }
}

/// Byte ranges of every case-insensitive, non-overlapping occurrence of
/// `term` in `text`, scanned left to right.
pub fn find_matches(text: &str, term: &str) -> Vec<Range<usize>> {
    let needle: Vec<char> = term.chars().map(fold_char).collect();
    if needle.is_empty() {
        return Vec::new();
    }

    let hay: Vec<(usize, char)> = text
        .char_indices()
        .map(|(i, c)| (i, fold_char(c)))
        .collect();

    let mut ranges = Vec::new();
    let mut i = 0;
    while i + needle.len() <= hay.len() {
        let window = &hay[i..i + needle.len()];
        if window.iter().map(|(_, c)| *c).eq(needle.iter().copied()) {
            let end = hay.get(i + needle.len()).map_or(text.len(), |(b, _)| *b);
            ranges.push(hay[i].0..end);
            i += needle.len();
        } else {
            i += 1;
        }
    }
    ranges
}

pub fn contains_folded(text: &str, term: &str) -> bool {
    !find_matches(text, term).is_empty()
}

/// Splits `segment` so every occurrence of `term` becomes its own piece with
/// HIGHLIGHT layered over the base style. Text between matches keeps the
/// base style. With no match (or an empty term) the segment comes back
/// untouched as the only element.
pub fn splice(segment: &StyledSegment, term: &str) -> Vec<StyledSegment> {
    let ranges = find_matches(&segment.text, term);
    if ranges.is_empty() {
        return vec![segment.clone()];
    }

    let base = segment.style;
    let lit = base | SegmentStyle::HIGHLIGHT;
    let mut pieces = Vec::with_capacity(ranges.len() * 2 + 1);
    let mut cursor = 0;

    for range in ranges {
        if range.start > cursor {
            pieces.push(StyledSegment::new(&segment.text[cursor..range.start], base));
        }
        pieces.push(StyledSegment::new(&segment.text[range.clone()], lit));
        cursor = range.end;
    }
    if cursor < segment.text.len() {
        pieces.push(StyledSegment::new(&segment.text[cursor..], base));
    }

    pieces
}
