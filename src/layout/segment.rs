use super::style::SegmentStyle;

/// A run of text sharing one style. Text may contain embedded newlines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSegment {
    pub text: String,
    pub style: SegmentStyle,
}

impl StyledSegment {
    pub fn new(text: impl Into<String>, style: SegmentStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Header position of a collapsible entry within a tab's segment sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionAnchor {
    pub key: String,
    pub segment: usize,
}

/// Everything a tab formatter produces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabContent {
    pub segments: Vec<StyledSegment>,
    pub sections: Vec<SectionAnchor>,
}

impl TabContent {
    /// Concatenation of every segment's text: the tab's plain document.
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}
