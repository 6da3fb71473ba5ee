use unicode_width::UnicodeWidthStr;

/// Wraps `text` to `width` columns, prefixing every produced line with
/// `indent` spaces.
///
/// Explicit newlines are hard breaks; blank lines survive as empty lines.
/// Words are packed greedily. A word wider than `width - indent` sits alone
/// on its line and is never split. A `width` of zero disables wrapping and
/// returns the input unchanged.
pub fn wrap(text: &str, indent: usize, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }

    let prefix = " ".repeat(indent);
    text.split('\n')
        .map(|paragraph| wrap_paragraph(paragraph, &prefix, width).join("\n"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn wrap_paragraph(paragraph: &str, prefix: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in paragraph.split_whitespace() {
        let word_width = word.width();

        if current.is_empty() {
            current.push_str(prefix);
            current.push_str(word);
            current_width = prefix.len() + word_width;
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(prefix);
            current.push_str(word);
            current_width = prefix.len() + word_width;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}
