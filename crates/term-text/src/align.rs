//! Horizontal alignment of escape-laden lines.
//!
//! Alignment only ever adds leading spaces: a left-aligned line loses its
//! leading whitespace, a right-aligned line its trailing whitespace, and a
//! centered line both. Content wider than the target is returned unpadded.

use crate::trim::trim_escaped;

/// How a line is placed within its width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    /// Keep the line untouched.
    #[default]
    None,
    Left,
    Center,
    Right,
}

/// Align `line` within `width` cells.
///
/// # Example
/// ```
/// use term_text::{Alignment, align_line};
///
/// assert_eq!(align_line("foo", 10, Alignment::Center), "   foo");
/// assert_eq!(align_line("foo  ", 6, Alignment::Right), "   foo");
/// assert_eq!(align_line("  foo", 6, Alignment::None), "  foo");
/// ```
#[must_use]
pub fn align_line(line: &str, width: usize, align: Alignment) -> String {
    match align {
        Alignment::None => line.to_string(),
        Alignment::Left => align_left(line, width),
        Alignment::Center => align_center(line, width),
        Alignment::Right => align_right(line, width),
    }
}

/// Strip leading whitespace. Left alignment never pads, whatever the width.
#[must_use]
pub fn align_left(line: &str, _width: usize) -> String {
    trim_escaped(line, true, false).text
}

/// Strip surrounding whitespace and prepend half of the free cells, rounded
/// down.
#[must_use]
pub fn align_center(line: &str, width: usize) -> String {
    let trimmed = trim_escaped(line, true, true);
    padded(trimmed.text, width.saturating_sub(trimmed.width) / 2)
}

/// Strip trailing whitespace and prepend every free cell.
#[must_use]
pub fn align_right(line: &str, width: usize) -> String {
    let trimmed = trim_escaped(line, false, true);
    padded(trimmed.text, width.saturating_sub(trimmed.width))
}

fn padded(text: String, spaces: usize) -> String {
    if spaces == 0 {
        return text;
    }
    let mut out = String::with_capacity(spaces + text.len());
    out.extend(std::iter::repeat_n(' ', spaces));
    out.push_str(&text);
    out
}
