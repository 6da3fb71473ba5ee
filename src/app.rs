use crate::config::AppConfig;
use crate::layout::{format_tab, Document, Highlight, TabContent};
use crate::model::Resume;
use crate::state::SectionState;

pub use crate::layout::{ScrollState, Tab};

/// Rows above the content viewport: title bar and tab strip.
pub const HEADER_ROWS: u16 = 2;
/// Rows below the content viewport.
pub const STATUS_ROWS: u16 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMode {
    Navigate,
    SearchEntry { query: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Inactive,
    Composing,
    Active,
}

/// Committed search: the term, the segments that hold it, and the selected one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub phase: SearchPhase,
    pub term: String,
    /// Indices into the active tab's segment sequence, strictly increasing.
    pub matches: Vec<usize>,
    /// Position in `matches`; `None` exactly when `matches` is empty.
    pub current: Option<usize>,
}

impl SearchState {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_active(&self) -> bool {
        self.phase == SearchPhase::Active
    }

    /// Segment index of the selected match.
    pub fn current_segment(&self) -> Option<usize> {
        self.current.and_then(|i| self.matches.get(i).copied())
    }
}

pub struct AppState {
    pub running: bool,
    pub mode: AppMode,
    pub resume: Resume,
    pub config: AppConfig,
    pub active_tab: Tab,
    pub scroll: ScrollState,
    pub search: SearchState,
    pub sections: SectionState,

    pub terminal_width: u16,
    pub terminal_height: u16,

    // Message for status line
    pub message: Option<String>,
}

impl AppState {
    pub fn new(resume: Resume, config: AppConfig) -> Self {
        Self {
            running: true,
            mode: AppMode::Navigate,
            resume,
            config,
            active_tab: Tab::Overview,
            scroll: ScrollState::default(),
            search: SearchState::default(),
            sections: SectionState::default(),
            terminal_width: 80,
            terminal_height: 24,
            message: None,
        }
    }

    pub fn content_width(&self) -> usize {
        self.terminal_width as usize
    }

    /// Content rows between header and status line; never below 1.
    pub fn viewport_height(&self) -> usize {
        self.terminal_height
            .saturating_sub(HEADER_ROWS + STATUS_ROWS)
            .max(1) as usize
    }

    /// The active tab laid out at the current width.
    pub fn content(&self) -> TabContent {
        format_tab(
            self.active_tab,
            &self.resume,
            self.content_width(),
            &self.sections,
        )
    }

    /// Display lines for the active tab, with the committed search spliced in.
    pub fn document(&self) -> Document {
        let highlight = if self.search.is_active() && !self.search.term.is_empty() {
            Some(Highlight {
                term: &self.search.term,
                current_segment: self.search.current_segment(),
            })
        } else {
            None
        };
        Document::build(&self.content().segments, highlight)
    }

    pub fn line_count(&self) -> usize {
        Document::build(&self.content().segments, None).line_count()
    }

    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }
}
