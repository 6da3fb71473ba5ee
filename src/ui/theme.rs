use crate::config::ThemeConfig;
use crate::layout::{ColorPair, SegmentStyle};
use ratatui::style::{Color, Modifier, Style};

/// Resolves a segment style against the configured colors. Color pairs and
/// flags stay opaque up to this point.
pub fn resolve(style: SegmentStyle, theme: &ThemeConfig) -> Style {
    let mut resolved = match style.color_pair() {
        ColorPair::Default | ColorPair::Text => Style::default(),
        ColorPair::Header => Style::default().fg(theme.header_fg).bg(theme.header_bg),
        ColorPair::SelectedTab => Style::default()
            .fg(theme.header_bg)
            .bg(theme.header_fg)
            .add_modifier(Modifier::BOLD),
        ColorPair::Accent => Style::default().fg(theme.accent),
        ColorPair::Positive => Style::default().fg(theme.positive),
        ColorPair::Info => Style::default().fg(theme.info),
    };

    if style.contains(SegmentStyle::BOLD) {
        resolved = resolved.add_modifier(Modifier::BOLD);
    }
    if style.contains(SegmentStyle::UNDERLINE) {
        resolved = resolved.add_modifier(Modifier::UNDERLINED);
    }
    if style.contains(SegmentStyle::CURRENT) {
        resolved = resolved
            .fg(Color::Black)
            .bg(theme.current_match)
            .add_modifier(Modifier::BOLD);
    } else if style.contains(SegmentStyle::HIGHLIGHT) {
        resolved = resolved.add_modifier(Modifier::REVERSED);
    }

    resolved
}
