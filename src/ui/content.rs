use crate::app::AppState;
use crate::config::ThemeConfig;
use crate::layout::viewport::{visible_slice, DisplayLine};
use crate::ui::theme::resolve;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

// Scrolled window into the active tab
pub struct ContentRenderer;

impl ContentRenderer {
    pub fn render(frame: &mut Frame, app: &AppState, area: Rect) {
        let document = app.document();
        let theme = &app.config.theme;
        let lines: Vec<Line> = visible_slice(&document.lines, app.scroll.offset, area.height as usize)
            .iter()
            .map(|line| to_line(line, theme))
            .collect();

        // No wrapping: lines were laid out for this width already
        frame.render_widget(Paragraph::new(lines), area);
    }
}

fn to_line(line: &DisplayLine, theme: &ThemeConfig) -> Line<'static> {
    Line::from(
        line.spans
            .iter()
            .map(|span| Span::styled(span.text.clone(), resolve(span.style, theme)))
            .collect::<Vec<_>>(),
    )
}
