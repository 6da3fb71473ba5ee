use crate::app::{AppState, Tab};

/// Every tab change lands at the top with no search in effect.
pub fn switch_tab(app: &mut AppState, tab: Tab) {
    app.active_tab = tab;
    app.scroll.reset();
    app.search.clear();
    app.clear_message();
    tracing::debug!(tab = tab.title(), "tab switched");
}

pub fn next_tab(app: &mut AppState) {
    switch_tab(app, app.active_tab.next());
}

pub fn previous_tab(app: &mut AppState) {
    switch_tab(app, app.active_tab.previous());
}

/// Digit shortcut; indices past the last tab are ignored.
pub fn select_tab(app: &mut AppState, index: usize) {
    if let Some(tab) = Tab::from_index(index) {
        switch_tab(app, tab);
    }
}
