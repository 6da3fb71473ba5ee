use super::search::reindex_search;
use crate::app::AppState;
use crate::layout::{Document, SectionAnchor};

/// The entry the reader is looking at: the last header at or above the top
/// row, or failing that the first header visible in the viewport.
fn section_at_top(app: &AppState) -> Option<(SectionAnchor, usize)> {
    let content = app.content();
    let document = Document::build(&content.segments, None);
    let top = app.scroll.offset;
    let bottom = top + app.viewport_height();

    let placed: Vec<(SectionAnchor, usize)> = content
        .sections
        .into_iter()
        .filter_map(|anchor| {
            let line = document.line_of_segment(anchor.segment)?;
            Some((anchor, line))
        })
        .collect();

    let above = placed.iter().rev().find(|(_, line)| *line <= top).cloned();
    above.or_else(|| {
        placed
            .into_iter()
            .find(|(_, line)| *line > top && *line < bottom)
    })
}

/// Content changed shape: keep the search index and the offset valid.
fn refresh(app: &mut AppState) {
    reindex_search(app);
    let line_count = app.line_count();
    app.scroll.clamp(line_count);
}

pub fn toggle_section(app: &mut AppState) {
    let Some((anchor, line)) = section_at_top(app) else {
        app.set_message("No collapsible section here");
        return;
    };

    let collapsed = app.sections.toggle(&anchor.key);
    // Text above the header is unchanged, so the header keeps its line
    if line < app.scroll.offset {
        app.scroll.offset = line;
    }
    refresh(app);

    let verb = if collapsed { "Collapsed" } else { "Expanded" };
    let name = anchor
        .key
        .split_once(':')
        .map_or(anchor.key.as_str(), |(_, name)| name);
    app.set_message(format!("{verb} {name}"));
    tracing::debug!(key = %anchor.key, collapsed, "section toggled");
}

fn set_all(app: &mut AppState, collapsed: bool) {
    let sections = app.content().sections;
    if sections.is_empty() {
        app.set_message("Nothing to collapse on this tab");
        return;
    }
    for anchor in &sections {
        app.sections.set_collapsed(&anchor.key, collapsed);
    }
    refresh(app);

    let verb = if collapsed { "Collapsed" } else { "Expanded" };
    app.set_message(format!("{verb} {} sections", sections.len()));
}

pub fn collapse_all(app: &mut AppState) {
    set_all(app, true);
}

pub fn expand_all(app: &mut AppState) {
    set_all(app, false);
}
