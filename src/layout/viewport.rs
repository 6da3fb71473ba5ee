//! Display lines and the scroller that windows them.
//!
//! Scrolling works on wrapped display lines rather than on segments: a
//! segment that spans several rows takes several scroll steps, and a line
//! built from several segments takes one.

use super::highlight::splice;
use super::segment::StyledSegment;
use super::style::SegmentStyle;

/// Rows kept above a search match when jumping to it.
pub const CONTEXT_LINES: usize = 2;

/// One terminal row worth of styled spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayLine {
    pub spans: Vec<StyledSegment>,
}

impl DisplayLine {
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Search term to splice into the document, plus the segment holding the
/// selected match.
#[derive(Debug, Clone, Copy)]
pub struct Highlight<'a> {
    pub term: &'a str,
    pub current_segment: Option<usize>,
}

/// A tab's segments broken into display lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub lines: Vec<DisplayLine>,
    /// For each source segment, the line its first visible character lands on.
    pub segment_lines: Vec<usize>,
}

impl Document {
    pub fn build(segments: &[StyledSegment], highlight: Option<Highlight<'_>>) -> Self {
        let mut lines = vec![DisplayLine::default()];
        let mut segment_lines = Vec::with_capacity(segments.len());

        for (index, segment) in segments.iter().enumerate() {
            let leading_breaks = segment.text.chars().take_while(|c| *c == '\n').count();
            segment_lines.push(lines.len() - 1 + leading_breaks);

            let pieces = match highlight {
                Some(h) if !h.term.is_empty() => {
                    let mut pieces = splice(segment, h.term);
                    if h.current_segment == Some(index) {
                        for piece in &mut pieces {
                            if piece.style.contains(SegmentStyle::HIGHLIGHT) {
                                piece.style |= SegmentStyle::CURRENT;
                            }
                        }
                    }
                    pieces
                }
                _ => vec![segment.clone()],
            };

            for piece in pieces {
                for (n, part) in piece.text.split('\n').enumerate() {
                    if n > 0 {
                        lines.push(DisplayLine::default());
                    }
                    if !part.is_empty() {
                        if let Some(line) = lines.last_mut() {
                            line.spans.push(StyledSegment::new(part, piece.style));
                        }
                    }
                }
            }
        }

        // A trailing newline ends the last line; it does not open a new one
        if lines.len() > 1 && lines.last().is_some_and(|l| l.spans.is_empty()) {
            lines.pop();
        }
        let last = lines.len() - 1;
        for line in &mut segment_lines {
            *line = (*line).min(last);
        }

        Self {
            lines,
            segment_lines,
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line_of_segment(&self, segment: usize) -> Option<usize> {
        self.segment_lines.get(segment).copied()
    }
}

/// Lines `offset .. offset + height`, cut short at the end of the content.
pub fn visible_slice<T>(lines: &[T], offset: usize, height: usize) -> &[T] {
    let start = offset.min(lines.len());
    let end = start.saturating_add(height).min(lines.len());
    &lines[start..end]
}

/// First visible display line, always kept within `[0, max(0, line_count - 1)]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub offset: usize,
}

impl ScrollState {
    pub fn max_offset(line_count: usize) -> usize {
        line_count.saturating_sub(1)
    }

    /// Rows moved by page up / page down.
    pub fn page_step(viewport_height: usize) -> usize {
        viewport_height.saturating_sub(2).max(1)
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    pub fn clamp(&mut self, line_count: usize) {
        self.offset = self.offset.min(Self::max_offset(line_count));
    }

    pub fn scroll_by(&mut self, delta: isize, line_count: usize) {
        self.offset = if delta < 0 {
            self.offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.offset.saturating_add(delta as usize)
        };
        self.clamp(line_count);
    }

    pub fn scroll_to_end(&mut self, line_count: usize) {
        self.offset = Self::max_offset(line_count);
    }

    /// Scrolls so `line` sits `CONTEXT_LINES` below the top edge when possible.
    pub fn jump_to_line(&mut self, line: usize, line_count: usize) {
        self.offset = line.saturating_sub(CONTEXT_LINES);
        self.clamp(line_count);
    }
}
