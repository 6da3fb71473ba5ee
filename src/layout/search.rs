//! Search index over a tab's segments.
//!
//! Navigation granularity is the segment: a segment holding the term twice
//! is still a single stop for next/previous.

use super::highlight::contains_folded;
use super::segment::StyledSegment;

/// Indices of the segments whose raw text contains `term`, case-insensitively.
/// Strictly increasing; empty for an empty term.
pub fn build_index(segments: &[StyledSegment], term: &str) -> Vec<usize> {
    if term.is_empty() {
        return Vec::new();
    }
    segments
        .iter()
        .enumerate()
        .filter(|(_, segment)| contains_folded(&segment.text, term))
        .map(|(index, _)| index)
        .collect()
}

/// Pointer after "next", wrapping past the end. `None` when there are no matches.
pub fn next_pointer(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(current.map_or(0, |p| (p + 1) % len))
}

/// Pointer after "previous", wrapping past the start.
pub fn previous_pointer(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(current.map_or(len - 1, |p| (p + len - 1) % len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::style::TEXT;

    fn segments(texts: &[&str]) -> Vec<StyledSegment> {
        texts.iter().map(|t| StyledSegment::new(*t, TEXT)).collect()
    }

    #[test]
    fn test_index_is_per_segment() {
        let segs = segments(&["rust rust", "go", "Rustacean", "swift"]);
        assert_eq!(build_index(&segs, "RUST"), vec![0, 2]);
    }

    #[test]
    fn test_empty_term_yields_empty_index() {
        let segs = segments(&["anything"]);
        assert!(build_index(&segs, "").is_empty());
    }

    #[test]
    fn test_index_strictly_increasing_and_in_bounds() {
        let segs = segments(&["a", "ab", "b", "ba", "", "aaa"]);
        let index = build_index(&segs, "a");
        assert!(index.windows(2).all(|w| w[0] < w[1]));
        assert!(index.iter().all(|&i| i < segs.len()));
        assert_eq!(index, vec![0, 1, 3, 5]);
    }

    #[test]
    fn test_pointer_wraps_both_ways() {
        assert_eq!(next_pointer(Some(2), 3), Some(0));
        assert_eq!(next_pointer(Some(0), 3), Some(1));
        assert_eq!(previous_pointer(Some(0), 3), Some(2));
        assert_eq!(previous_pointer(Some(2), 3), Some(1));
    }

    #[test]
    fn test_pointer_noop_on_empty() {
        assert_eq!(next_pointer(None, 0), None);
        assert_eq!(previous_pointer(Some(4), 0), None);
    }

    #[test]
    fn test_next_twice_over_two_matches_returns_to_start() {
        let start = Some(0);
        let once = next_pointer(start, 2);
        assert_eq!(next_pointer(once, 2), start);
    }
}
