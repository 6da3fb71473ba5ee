//! Turns a `Resume` into styled text segments and windows them for display.
//!
//! Everything in here is pure: formatting, highlighting, search indexing and
//! scrolling are functions of their inputs, so the UI only has to paint.

pub mod bar;
pub mod builder;
pub mod highlight;
pub mod search;
pub mod segment;
pub mod style;
pub mod tabs;
pub mod viewport;
pub mod wrap;

pub use segment::{SectionAnchor, StyledSegment, TabContent};
pub use style::{ColorPair, SegmentStyle};
pub use tabs::{format_tab, Tab};
pub use viewport::{Document, Highlight, ScrollState};
