// Text formatters
//
// Shared helpers for fitting text into fixed-width cells.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `text` to `max_width` display columns, ending with `…` when cut
///
/// Uses unicode display width (not byte length) so accented names and wide
/// glyphs line up in the card grid.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    // Leave room for the ellipsis (1 column)
    let target_width = max_width - 1;
    let mut current_width = 0;
    let mut out = String::new();
    for c in text.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > target_width {
            break;
        }
        current_width += char_width;
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_untouched() {
        assert_eq!(truncate_to_width("Mia", 10), "Mia");
    }

    #[test]
    fn test_truncates_by_display_width() {
        assert_eq!(truncate_to_width("Frajola travessa", 8), "Frajola…");
        assert_eq!(truncate_to_width("Fêmea castrada", 6), "Fêmea…");
    }

    #[test]
    fn test_wide_glyphs_count_double() {
        // Each glyph is 2 columns; 5 columns fit two glyphs plus the ellipsis
        assert_eq!(truncate_to_width("猫猫猫猫", 5), "猫猫…");
    }

    #[test]
    fn test_zero_width() {
        assert_eq!(truncate_to_width("Thor", 0), "");
    }
}
