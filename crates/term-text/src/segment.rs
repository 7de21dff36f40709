#![forbid(unsafe_code)]

//! Unbreakable chunks of an escape-free line.
//!
//! A line is cut into maximal runs of runes sharing a [`BreakCategory`].
//! Wide runes are the exception: each one is a chunk of its own, so CJK text
//! may break between any two glyphs. The wrapper only ever inserts breaks
//! between chunks (or inside a chunk too long for a whole line).

use crate::width::char_width;

/// Line-breaking category of a rune.
///
/// These are not Unicode general categories: they only decide which runes
/// stick together when a line is wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BreakCategory {
    /// Occupies two cells. Always a chunk by itself.
    Wide,
    /// Occupies no cell: combining marks, zero-width and control runes.
    Invisible,
    /// One cell, outside ASCII.
    ShortUnicode,
    /// The ASCII space.
    Space,
    /// Any other ASCII rune.
    VisibleAscii,
}

impl BreakCategory {
    /// Classify a single rune.
    #[must_use]
    pub fn of(ch: char) -> Self {
        match char_width(ch) {
            w if w > 1 => Self::Wide,
            0 => Self::Invisible,
            _ if !ch.is_ascii() => Self::ShortUnicode,
            _ if ch == ' ' => Self::Space,
            _ => Self::VisibleAscii,
        }
    }
}

/// Cut `line` into unbreakable chunks.
///
/// Concatenating the chunks yields `line` back; no chunk is empty. The line
/// must not contain escape runs or `\n`.
///
/// # Example
/// ```
/// use term_text::segment_line;
///
/// assert_eq!(segment_line("to 一只"), vec!["to", " ", "一", "只"]);
/// ```
#[must_use]
pub fn segment_line(line: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut current: Option<BreakCategory> = None;

    for (idx, ch) in line.char_indices() {
        let category = BreakCategory::of(ch);
        if category == BreakCategory::Wide {
            if current.take().is_some() {
                chunks.push(&line[start..idx]);
            }
            chunks.push(&line[idx..idx + ch.len_utf8()]);
            start = idx + ch.len_utf8();
            continue;
        }
        match current {
            Some(run) if run == category => {}
            Some(_) => {
                chunks.push(&line[start..idx]);
                start = idx;
                current = Some(category);
            }
            None => {
                start = idx;
                current = Some(category);
            }
        }
    }

    if current.is_some() && start < line.len() {
        chunks.push(&line[start..]);
    }

    chunks
}
