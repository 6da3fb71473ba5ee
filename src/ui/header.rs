use crate::app::{AppState, Tab};
use crate::layout::style::TEXT;
use crate::layout::{ColorPair, SegmentStyle};
use crate::ui::constants::{TAB_SEPARATOR, TITLE_SUFFIX};
use crate::ui::theme::resolve;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

// Title bar and tab strip
pub struct HeaderRenderer;

impl HeaderRenderer {
    pub fn render(frame: &mut Frame, app: &AppState, area: Rect) {
        let rows = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(area);
        let title_style = resolve(
            SegmentStyle::pair(ColorPair::Header) | SegmentStyle::BOLD,
            &app.config.theme,
        );

        let title = Paragraph::new(Self::title(app)).style(title_style);
        frame.render_widget(title, rows[0]);
        frame.render_widget(Paragraph::new(Self::tab_line(app)), rows[1]);
    }

    pub fn title(app: &AppState) -> String {
        format!(" {}{TITLE_SUFFIX}", app.resume.name)
    }

    /// Every tab with its digit shortcut; the active one in the selected style.
    pub fn tab_line(app: &AppState) -> Line<'static> {
        let theme = &app.config.theme;
        let mut spans = Vec::with_capacity(Tab::ALL.len() * 2);
        for (i, tab) in Tab::ALL.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(TAB_SEPARATOR));
            }
            let style = if *tab == app.active_tab {
                SegmentStyle::pair(ColorPair::SelectedTab)
            } else {
                TEXT
            };
            spans.push(Span::styled(
                format!(" {} {} ", i + 1, tab.title()),
                resolve(style, theme),
            ));
        }
        Line::from(spans)
    }
}
