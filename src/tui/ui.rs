//! UI rendering helpers for the TUI
//!
//! Common layout utilities shared by the section widgets and modals.

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Center a rect of the given size within `area`.
///
/// The size is clamped so the rect always fits with a small margin, even in
/// tiny terminals. Used by every modal overlay.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Truncate `text` to at most `max_width` display columns, appending an
/// ellipsis when something was cut. Width-aware for wide characters.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1; // reserve a column for the ellipsis
    let mut width = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_centered() {
        let area = Rect::new(0, 0, 100, 40);
        let centered = centered_rect(area, 60, 14);

        assert_eq!(centered.width, 60);
        assert_eq!(centered.height, 14);
        assert_eq!(centered.x, 20);
        assert_eq!(centered.y, 13);
    }

    #[test]
    fn centered_rect_respects_area_offset() {
        let area = Rect::new(10, 5, 100, 40);
        let centered = centered_rect(area, 60, 14);

        assert_eq!(centered.x, 30);
        assert_eq!(centered.y, 18);
    }

    #[test]
    fn centered_rect_clamps_to_small_areas() {
        let area = Rect::new(0, 0, 30, 8);
        let centered = centered_rect(area, 60, 14);

        assert!(centered.width <= area.width);
        assert!(centered.height <= area.height);
        assert!(centered.right() <= area.right());
        assert!(centered.bottom() <= area.bottom());
    }

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello", 5), "hello");
    }

    #[test]
    fn truncate_cuts_long_text_with_ellipsis() {
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
    }

    #[test]
    fn truncate_is_width_aware_for_wide_chars() {
        // Each CJK character is two columns wide
        let truncated = truncate_to_width("ポートフォリオ", 5);
        assert!(UnicodeWidthStr::width(truncated.as_str()) <= 5);
        assert!(truncated.ends_with('…'));
    }

    #[test]
    fn truncate_to_zero_width_is_empty() {
        assert_eq!(truncate_to_width("hello", 0), "");
    }
}
