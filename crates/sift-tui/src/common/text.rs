//! Text utilities for TUI rendering.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width in terminal columns (unicode-aware).
pub fn display_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

/// Truncates a string with ellipsis if it exceeds max_width (unicode-aware).
///
/// Wide characters (CJK, emoji) count for their full column width.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    if max_width == 1 {
        return "…".to_string();
    }
    let mut truncated = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        used += w;
        truncated.push(ch);
    }
    truncated.push('…');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_fits() {
        assert_eq!(truncate_with_ellipsis("status", 10), "status");
    }

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate_with_ellipsis("status=open", 6), "statu…");
        assert_eq!(truncate_with_ellipsis("status", 1), "…");
        assert_eq!(truncate_with_ellipsis("status", 0), "");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each CJK char is 2 columns wide.
        assert_eq!(truncate_with_ellipsis("状態状態", 5), "状態…");
        assert_eq!(display_width("状態"), 4);
    }
}
