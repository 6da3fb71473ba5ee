mod scroll;
mod search;
mod sections;
mod tabs;

use crate::app::AppState;
use anyhow::Result;

pub use scroll::*;
pub use search::*;
pub use sections::*;
pub use tabs::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Application control
    Quit,
    Resize(u16, u16),

    // Tabs
    NextTab,
    PreviousTab,
    SelectTab(usize),

    // Scrolling
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollTop,
    ScrollBottom,

    // Search
    StartSearch,
    TypeSearchChar(char),
    BackspaceSearch,
    ConfirmSearch,
    CancelSearch,
    NextMatch,
    PreviousMatch,

    // Sections
    ToggleSection,
    CollapseAll,
    ExpandAll,
}

pub fn execute_action(action: Action, app: &mut AppState) -> Result<()> {
    match action {
        Action::Quit => {
            app.running = false;
        }
        Action::Resize(width, height) => scroll::resize(app, width, height),

        Action::NextTab => tabs::next_tab(app),
        Action::PreviousTab => tabs::previous_tab(app),
        Action::SelectTab(index) => tabs::select_tab(app, index),

        Action::ScrollUp => scroll::scroll_up(app),
        Action::ScrollDown => scroll::scroll_down(app),
        Action::PageUp => scroll::page_up(app),
        Action::PageDown => scroll::page_down(app),
        Action::ScrollTop => scroll::scroll_top(app),
        Action::ScrollBottom => scroll::scroll_bottom(app),

        Action::StartSearch => search::start_search(app),
        Action::TypeSearchChar(c) => search::type_search_char(app, c),
        Action::BackspaceSearch => search::backspace_search(app),
        Action::ConfirmSearch => search::confirm_search(app),
        Action::CancelSearch => search::cancel_search(app),
        Action::NextMatch => search::next_match(app),
        Action::PreviousMatch => search::previous_match(app),

        Action::ToggleSection => sections::toggle_section(app),
        Action::CollapseAll => sections::collapse_all(app),
        Action::ExpandAll => sections::expand_all(app),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Tab;
    use crate::config::AppConfig;
    use crate::layout::tabs::test_support::sample_resume;

    #[test]
    fn test_quit_stops_loop() {
        let mut app = AppState::new(sample_resume(), AppConfig::default());
        execute_action(Action::Quit, &mut app).unwrap();
        assert!(!app.running);
    }

    #[test]
    fn test_dispatch_reaches_handlers() {
        let mut app = AppState::new(sample_resume(), AppConfig::default());
        execute_action(Action::SelectTab(1), &mut app).unwrap();
        assert_eq!(app.active_tab, Tab::Experience);
        execute_action(Action::ScrollDown, &mut app).unwrap();
        assert_eq!(app.scroll.offset, 1);
        execute_action(Action::StartSearch, &mut app).unwrap();
        execute_action(Action::TypeSearchChar('x'), &mut app).unwrap();
        execute_action(Action::CancelSearch, &mut app).unwrap();
        assert_eq!(app.mode, crate::app::AppMode::Navigate);
    }
}
