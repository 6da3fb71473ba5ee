use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const BAR_FILLED: char = '█';
pub const BAR_EMPTY: char = '░';
pub const STAR_FILLED: char = '★';
pub const STAR_EMPTY: char = '☆';

/// Renders `value` out of `max` as a bracketed block bar exactly `width`
/// columns wide. `value` is clamped to `0..=max`. Widths below 2 leave no
/// room for the brackets and yield an empty string.
pub fn render_bar(value: i64, max: i64, width: usize) -> String {
    if width < 2 {
        return String::new();
    }

    let inner = width - 2;
    let filled = if max <= 0 {
        0
    } else {
        let ratio = value.clamp(0, max) as f64 / max as f64;
        ((ratio * inner as f64).round() as usize).min(inner)
    };

    let mut bar = String::with_capacity(width * 3);
    bar.push('[');
    bar.extend(std::iter::repeat(BAR_FILLED).take(filled));
    bar.extend(std::iter::repeat(BAR_EMPTY).take(inner - filled));
    bar.push(']');
    bar
}

/// Renders exactly `max` star glyphs, the first `value` of them filled.
pub fn render_stars(value: i64, max: i64) -> String {
    let max = max.max(0) as usize;
    let filled = (value.max(0) as usize).min(max);

    std::iter::repeat(STAR_FILLED)
        .take(filled)
        .chain(std::iter::repeat(STAR_EMPTY).take(max - filled))
        .collect()
}

/// Pads or truncates `text` to exactly `width` display columns. Truncated
/// text ends in an ellipsis so a clipped name is recognisable.
pub fn fit(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width <= width {
        return format!("{}{}", text, " ".repeat(width - text_width));
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width - used));
    out
}
