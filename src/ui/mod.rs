mod constants;
mod content;
mod header;
mod status_line;
pub mod theme;


use crate::app::{AppState, HEADER_ROWS, STATUS_ROWS};
use ratatui::{
    layout::{Constraint, Layout},
    Frame,
};

pub use content::ContentRenderer;
pub use header::HeaderRenderer;
pub use status_line::StatusLineRenderer;

/// Paints one frame: header, the visible slice of the active tab, status line.
pub fn render(frame: &mut Frame, app: &AppState) {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_ROWS),
        Constraint::Min(1),
        Constraint::Length(STATUS_ROWS),
    ])
    .split(frame.area());

    HeaderRenderer::render(frame, app, chunks[0]);
    ContentRenderer::render(frame, app, chunks[1]);
    StatusLineRenderer::render(frame, app, chunks[2]);
}
