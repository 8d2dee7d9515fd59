use crate::completion::MAX_STARS;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cuts `s` to at most `max_width` display columns, ending in "..." when cut.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str("...");
    out
}

/// Centers `s` in a field `width` columns wide.
pub fn pad_center(s: &str, width: usize) -> String {
    let w = s.width();
    if w >= width {
        return s.to_string();
    }
    let left = (width - w) / 2;
    let right = width - w - left;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(right))
}

pub fn star_row(stars: u8) -> String {
    (1..=MAX_STARS)
        .map(|star| if star <= stars { "⭐" } else { "☆" })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Key/label pairs rendered as a help line, keys highlighted.
pub fn help_line(entries: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(entries.len() * 2);
    for (key, label) in entries {
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::from(format!(" {}  ", label)));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string_no_truncation() {
        assert_eq!(truncate_string("Дуб", 10), "Дуб");
    }

    #[test]
    fn test_truncate_string_cyrillic() {
        let result = truncate_string("Выполнил все задания по русскому языку", 12);
        assert_eq!(result, "Выполнил ...");
        assert!(result.width() <= 12);
    }

    #[test]
    fn test_truncate_string_empty() {
        assert_eq!(truncate_string("", 5), "");
    }

    #[test]
    fn test_pad_center() {
        assert_eq!(pad_center("А", 5), "  А  ");
        assert_eq!(pad_center("...", 4), "... ");
        assert_eq!(pad_center("Стол", 2), "Стол");
    }

    #[test]
    fn test_star_row() {
        assert_eq!(star_row(0), "☆ ☆ ☆");
        assert_eq!(star_row(2), "⭐ ⭐ ☆");
        assert_eq!(star_row(3), "⭐ ⭐ ⭐");
    }

    #[test]
    fn test_help_line_spans() {
        let line = help_line(&[("Enter", "Выбрать"), ("q", "Выход")]);
        assert_eq!(line.spans.len(), 4);
        assert_eq!(line.spans[0].content, "Enter");
        assert_eq!(line.spans[1].content, " Выбрать  ");
    }
}
