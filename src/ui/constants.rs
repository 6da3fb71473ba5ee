// Constants for rendering
pub const CURSOR_INDICATOR: char = '▌';
pub const STATUS_SEARCH_PREFIX: &str = "Search: ";
pub const TITLE_SUFFIX: &str = " — Resume";
pub const TAB_SEPARATOR: &str = "  ";

pub const NAVIGATE_HINTS: &str = "←/→ tabs · ↑/↓ scroll · / search · n/N match · space fold · q quit";
