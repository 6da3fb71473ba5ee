use super::segment::{SectionAnchor, StyledSegment, TabContent};
use super::style::{SegmentStyle, TEXT};
use super::wrap::wrap;
use unicode_width::UnicodeWidthStr;

/// Columns left free at the right edge when wrapping paragraphs.
pub const RIGHT_MARGIN: usize = 2;
/// Left padding shared by every tab.
pub const LEFT_PAD: &str = "  ";

const TITLE_RULE_LEN: usize = 30;
const RULE: char = '─';
const DOTTED: char = '·';
/// Appended to the header of a collapsed entry.
pub const COLLAPSED_MARKER: &str = " [+]";

/// Line-building helpers shared by the tab formatters.
pub struct ContentBuilder {
    width: usize,
    content: TabContent,
}

impl ContentBuilder {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            content: TabContent::default(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn push(&mut self, text: impl Into<String>, style: SegmentStyle) {
        self.content.segments.push(StyledSegment::new(text, style));
    }

    /// Bold title preceded by a blank line and followed by a rule and a blank line.
    pub fn section_title(&mut self, title: &str) {
        let rule_len = TITLE_RULE_LEN.min(self.width.saturating_sub(LEFT_PAD.len()));
        self.push(format!("\n{LEFT_PAD}{title}\n"), TEXT | SegmentStyle::BOLD);
        self.push(
            format!("{LEFT_PAD}{}\n\n", RULE.to_string().repeat(rule_len)),
            TEXT,
        );
    }

    /// Header line of a collapsible entry; records its anchor.
    pub fn entry_header(&mut self, key: String, text: &str, collapsed: bool) {
        self.content.sections.push(SectionAnchor {
            key,
            segment: self.content.segments.len(),
        });
        let marker = if collapsed { COLLAPSED_MARKER } else { "" };
        self.push(
            format!("{LEFT_PAD}{text}{marker}\n"),
            TEXT | SegmentStyle::BOLD,
        );
    }

    pub fn line(&mut self, indent: usize, text: &str, style: SegmentStyle) {
        self.push(format!("{}{}\n", " ".repeat(indent), text), style);
    }

    /// `label: ` in plain text followed by the value in its own style.
    pub fn labeled(&mut self, indent: usize, label: &str, value: &str, value_style: SegmentStyle) {
        self.push(format!("{}{}: ", " ".repeat(indent), label), TEXT);
        self.push(format!("{value}\n"), value_style);
    }

    pub fn paragraph(&mut self, text: &str, indent: usize, style: SegmentStyle) {
        let width = self.width.saturating_sub(RIGHT_MARGIN);
        self.push(format!("{}\n", wrap(text, indent, width)), style);
    }

    /// List item with a hanging indent: `marker` stays on the first line and
    /// continuation lines align with the text after it.
    pub fn bullet(&mut self, marker: &str, text: &str, indent: usize, style: SegmentStyle) {
        let width = self.width.saturating_sub(RIGHT_MARGIN);
        let hang = " ".repeat(indent + marker.width() + 1);
        let wrapped = wrap(text, hang.len(), width);
        let body = wrapped.strip_prefix(hang.as_str()).unwrap_or(&wrapped);
        self.push(
            format!("{}{marker} {body}\n", " ".repeat(indent)),
            style,
        );
    }

    pub fn blank(&mut self) {
        self.push("\n", TEXT);
    }

    /// Dotted rule between entries, padded by a blank line on each side.
    pub fn entry_divider(&mut self) {
        let len = self.width.saturating_sub(2 * LEFT_PAD.len());
        self.push(
            format!("\n{LEFT_PAD}{}\n\n", DOTTED.to_string().repeat(len)),
            TEXT,
        );
    }

    pub fn finish(self) -> TabContent {
        self.content
    }
}
