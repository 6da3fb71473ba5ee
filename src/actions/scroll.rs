use super::search::reindex_search;
use crate::app::{AppState, ScrollState};

fn scroll_by(app: &mut AppState, delta: isize) {
    let line_count = app.line_count();
    app.scroll.scroll_by(delta, line_count);
}

pub fn scroll_up(app: &mut AppState) {
    scroll_by(app, -1);
}

pub fn scroll_down(app: &mut AppState) {
    scroll_by(app, 1);
}

pub fn page_up(app: &mut AppState) {
    let step = ScrollState::page_step(app.viewport_height()) as isize;
    scroll_by(app, -step);
}

pub fn page_down(app: &mut AppState) {
    let step = ScrollState::page_step(app.viewport_height()) as isize;
    scroll_by(app, step);
}

pub fn scroll_top(app: &mut AppState) {
    app.scroll.reset();
}

pub fn scroll_bottom(app: &mut AppState) {
    let line_count = app.line_count();
    app.scroll.scroll_to_end(line_count);
}

/// New terminal size: content is re-laid out at the new width, so the
/// search index and the offset are brought back in range.
pub fn resize(app: &mut AppState, width: u16, height: u16) {
    app.terminal_width = width;
    app.terminal_height = height;
    reindex_search(app);
    let line_count = app.line_count();
    app.scroll.clamp(line_count);
    tracing::debug!(width, height, line_count, "terminal resized");
}
