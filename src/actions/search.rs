use crate::app::{AppMode, AppState, SearchPhase};
use crate::layout::search::{build_index, next_pointer, previous_pointer};
use crate::layout::Document;

pub fn start_search(app: &mut AppState) {
    app.mode = AppMode::SearchEntry {
        query: String::new(),
    };
    app.search.clear();
    app.search.phase = SearchPhase::Composing;
    app.clear_message();
}

pub fn type_search_char(app: &mut AppState, c: char) {
    if let AppMode::SearchEntry { query } = &mut app.mode {
        query.push(c);
    }
}

pub fn backspace_search(app: &mut AppState) {
    if let AppMode::SearchEntry { query } = &mut app.mode {
        query.pop();
    }
}

/// Commits the composed term, indexes the active tab and scrolls to the
/// first match. An empty term leaves no search in effect.
pub fn confirm_search(app: &mut AppState) {
    let query = match std::mem::replace(&mut app.mode, AppMode::Navigate) {
        AppMode::SearchEntry { query } => query,
        AppMode::Navigate => return,
    };

    app.search.clear();
    app.clear_message();
    if query.is_empty() {
        return;
    }

    let content = app.content();
    let matches = build_index(&content.segments, &query);
    tracing::debug!(term = %query, matches = matches.len(), "search submitted");

    app.search.current = if matches.is_empty() { None } else { Some(0) };
    app.search.matches = matches;
    app.search.term = query;
    app.search.phase = SearchPhase::Active;
    jump_to_current(app);
}

pub fn cancel_search(app: &mut AppState) {
    app.mode = AppMode::Navigate;
    app.search.clear();
}

pub fn next_match(app: &mut AppState) {
    if !app.search.is_active() || app.search.matches.is_empty() {
        return;
    }
    app.search.current = next_pointer(app.search.current, app.search.matches.len());
    jump_to_current(app);
}

pub fn previous_match(app: &mut AppState) {
    if !app.search.is_active() || app.search.matches.is_empty() {
        return;
    }
    app.search.current = previous_pointer(app.search.current, app.search.matches.len());
    jump_to_current(app);
}

/// Scrolls so the selected match sits a couple of lines below the top.
fn jump_to_current(app: &mut AppState) {
    app.clear_message();
    let Some(segment) = app.search.current_segment() else {
        return;
    };
    let document = Document::build(&app.content().segments, None);
    if let Some(line) = document.line_of_segment(segment) {
        app.scroll.jump_to_line(line, document.line_count());
        tracing::debug!(segment, line, offset = app.scroll.offset, "jumped to match");
    }
}

/// Rebuilds an active search against the current content after it changed
/// shape (collapse, resize). The pointer stays where it was when possible.
pub(crate) fn reindex_search(app: &mut AppState) {
    if !app.search.is_active() {
        return;
    }
    let matches = build_index(&app.content().segments, &app.search.term);
    app.search.current = match (app.search.current, matches.len()) {
        (_, 0) => None,
        (Some(current), len) => Some(current.min(len - 1)),
        (None, _) => Some(0),
    };
    app.search.matches = matches;
}
