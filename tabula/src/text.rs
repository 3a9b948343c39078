//! Display-width helpers for the text renderers.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::components::Alignment;

/// Terminal cells taken by `s`.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Shorten `s` to at most `max_width` cells. A shortened string ends in `…`,
/// which takes the last cell.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let Some(budget) = max_width.checked_sub(1) else {
        return String::new();
    };

    let mut used = 0;
    let mut kept: String = s
        .chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= budget
        })
        .collect();
    kept.push('…');
    kept
}

pub fn align_offset(text_width: usize, available_width: usize, align: Alignment) -> usize {
    if text_width >= available_width {
        return 0;
    }

    match align {
        Alignment::Left => 0,
        Alignment::Center => (available_width - text_width) / 2,
        Alignment::Right => available_width - text_width,
    }
}

/// Fit `s` into exactly `width` cells: truncate when too wide, otherwise pad
/// with spaces according to `align`.
pub fn fit_to_width(s: &str, width: usize, align: Alignment) -> String {
    let fitted = truncate_to_width(s, width);
    let text_width = display_width(&fitted);
    let left = align_offset(text_width, width, align);
    let right = width.saturating_sub(text_width + left);

    let mut out = String::with_capacity(fitted.len() + left + right);
    out.extend(std::iter::repeat_n(' ', left));
    out.push_str(&fitted);
    out.extend(std::iter::repeat_n(' ', right));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_pads_wide_chars_by_cells() {
        // "日本" is four cells wide
        let out = fit_to_width("日本", 6, Alignment::Right);
        assert_eq!(out, "  日本");
        assert_eq!(display_width(&out), 6);
    }

    #[test]
    fn test_truncate_keeps_wide_chars_whole() {
        assert_eq!(truncate_to_width("日本語", 4), "日…");
        assert_eq!(truncate_to_width("Karan", 5), "Karan");
        assert_eq!(truncate_to_width("Karan", 1), "…");
    }

    #[test]
    fn test_fit_zero_width() {
        assert_eq!(fit_to_width("abc", 0, Alignment::Left), "");
    }
}
