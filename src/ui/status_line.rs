use crate::app::{AppMode, AppState};
use crate::ui::constants::{CURSOR_INDICATOR, NAVIGATE_HINTS, STATUS_SEARCH_PREFIX};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

// Status line renderer
pub struct StatusLineRenderer;

impl StatusLineRenderer {
    pub fn render(frame: &mut Frame, app: &AppState, area: Rect) {
        let (content, style) = Self::get_content_and_style(app);
        frame.render_widget(Paragraph::new(content).style(style), area);
    }

    pub fn get_content_and_style(app: &AppState) -> (String, Style) {
        match &app.mode {
            AppMode::SearchEntry { query } => (
                format!("{STATUS_SEARCH_PREFIX}{query}{CURSOR_INDICATOR}"),
                Style::default().fg(Color::Black).bg(app.config.theme.accent),
            ),
            AppMode::Navigate => Self::render_navigate_mode(app),
        }
    }

    fn render_navigate_mode(app: &AppState) -> (String, Style) {
        if let Some(ref msg) = app.message {
            let style = Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD);
            return (msg.clone(), style);
        }

        let search = &app.search;
        if search.is_active() {
            let content = match search.current {
                Some(i) => format!("Match {}/{}: \"{}\"", i + 1, search.matches.len(), search.term),
                None => format!("No matches for \"{}\"", search.term),
            };
            return (content, Style::default().fg(app.config.theme.accent).bg(Color::Black));
        }

        (
            NAVIGATE_HINTS.to_string(),
            Style::default().fg(Color::Gray).bg(Color::Black),
        )
    }
}
