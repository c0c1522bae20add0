//! Width-aware text helpers shared by the card, the feed and the page view

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrap text respecting unicode character widths (CJK = 2 columns)
pub fn wrap_text_unicode(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut result = Vec::new();

    for paragraph in text.lines() {
        if paragraph.is_empty() {
            result.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        let mut current_width = 0;

        for word in paragraph.split_inclusive(' ') {
            let word_width = word.trim_end().width();
            if current_width > 0 && current_width + word_width > max_width {
                result.push(current_line.trim_end().to_string());
                current_line = String::new();
                current_width = 0;
            }

            // Words longer than a whole line are broken per character
            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(1);
                if current_width > 0 && current_width + ch_width > max_width && ch != ' ' {
                    result.push(current_line.trim_end().to_string());
                    current_line = String::new();
                    current_width = 0;
                }
                current_line.push(ch);
                current_width += ch_width;
            }
        }

        if !current_line.trim_end().is_empty() {
            result.push(current_line.trim_end().to_string());
        }
    }

    if result.is_empty() {
        result.push(String::new());
    }

    result
}

/// Cut `text` to `max_width` columns, ending in "…" when shortened
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(1);
        if width + ch_width > max_width - 1 {
            break;
        }
        out.push(ch);
        width += ch_width;
    }
    out.push('…');
    out
}
