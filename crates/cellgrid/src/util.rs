//! Display-width helpers.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::types::Align;

/// Display width of a string in terminal columns.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Truncates a string to fit within a maximum display width, adding ellipsis if needed.
///
/// Uses Unicode width calculations for proper handling of CJK and other wide characters.
/// If the string fits within `max_width`, it is returned unchanged.
///
/// # Example
///
/// ```rust
/// use cellgrid::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Hello", 10), "Hello");
/// assert_eq!(truncate_to_width("Hello World", 6), "Hello…");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut result = take_width(s, max_width - 1);
    result.push('…');
    result
}

/// Longest prefix of `s` whose display width does not exceed `limit`.
/// Replaces line breaks and other control characters with spaces, so the
/// text occupies exactly one terminal line.
pub(crate) fn single_line(s: &str) -> String {
    s.replace("\r\n", " ")
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

pub(crate) fn take_width(s: &str, limit: usize) -> String {
    let mut result = String::new();
    let mut current = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if current + w > limit {
            break;
        }
        result.push(c);
        current += w;
    }
    result
}

/// Left and right padding needed to place `content_width` inside `width`.
pub(crate) fn padding(content_width: usize, width: usize, align: Align) -> (usize, usize) {
    let gap = width.saturating_sub(content_width);
    match align {
        Align::Left => (0, gap),
        Align::Right => (gap, 0),
        Align::Center => (gap / 2, gap - gap / 2),
    }
}

/// Pads a string to `width` according to `align`. Never truncates.
pub fn pad(s: &str, width: usize, align: Align) -> String {
    let (left, right) = padding(s.width(), width, align);
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(right))
}
