//! Whitespace trimming, truncation and padding of escape-laden lines.

use crate::ELLIPSIS;
use crate::escape::{clamp_items, extract_escapes, offset_items, reinsert_escapes};
use crate::width::{char_width, display_width};
use crate::wrap::split_by_width;

/// Result of trimming the escape-free text of a line.
pub(crate) struct Trimmed {
    /// Trimmed text with its escapes put back.
    pub text: String,
    /// Display width of the trimmed text.
    pub width: usize,
    /// Runes removed at the start.
    pub left: usize,
    /// Runes removed at the end.
    pub right: usize,
}

/// Trim Unicode whitespace at either end of `line`, escapes ignored.
///
/// Escapes inside the removed whitespace are kept: those on the left open
/// the trimmed text, those on the right close it.
pub(crate) fn trim_escaped(line: &str, leading: bool, trailing: bool) -> Trimmed {
    let (cleaned, escapes) = extract_escapes(line);
    let mut kept = cleaned.as_str();

    let mut left = 0;
    let mut shift: isize = 0;
    if leading {
        let rest = kept.trim_start();
        for ch in kept[..kept.len() - rest.len()].chars() {
            left += 1;
            if ch != '\n' {
                shift += 1;
            }
        }
        kept = rest;
    }

    let mut right = 0;
    if trailing {
        let rest = kept.trim_end();
        right = kept[rest.len()..].chars().count();
        kept = rest;
    }

    let len = kept.chars().filter(|&ch| ch != '\n').count();
    let items = clamp_items(&offset_items(&escapes, -shift), len);

    Trimmed {
        text: reinsert_escapes(kept, &items),
        width: display_width(kept),
        left,
        right,
    }
}

/// Remove leading and trailing whitespace, ignoring escape runs.
///
/// Returns the trimmed line and the number of runes removed on the left and
/// on the right.
///
/// # Example
/// ```
/// use term_text::trim_space;
///
/// let (trimmed, left, right) = trim_space("  \x1b[31m   bar     \x1b[0m   ");
/// assert_eq!(trimmed, "\x1b[31mbar\x1b[0m");
/// assert_eq!((left, right), (5, 8));
/// ```
#[must_use]
pub fn trim_space(line: &str) -> (String, usize, usize) {
    let trimmed = trim_escaped(line, true, true);
    (trimmed.text, trimmed.left, trimmed.right)
}

/// Truncate `line` to at most `max_width` cells, ending with `…` when
/// anything was cut.
///
/// The ellipsis takes its own width, two cells when ambiguous glyphs are
/// wide. Escapes of the cut-off part are kept, right before the ellipsis,
/// so styles opened in the kept part are still closed.
#[must_use]
pub fn truncate_max(line: &str, max_width: usize) -> String {
    if display_width(line) <= max_width {
        return line.to_string();
    }
    let ellipsis_width = char_width(ELLIPSIS);
    if max_width <= ellipsis_width {
        return ELLIPSIS.to_string();
    }

    let (cleaned, escapes) = extract_escapes(line);
    let room = isize::try_from(max_width - ellipsis_width).unwrap_or(isize::MAX);
    let (kept, _) = split_by_width(&cleaned, room);

    let mut out = reinsert_escapes(kept, &escapes);
    out.push(ELLIPSIS);
    out
}

/// Prefix every `\n`-separated line of `text` with `left_pad` spaces.
///
/// A trailing `\n` yields a last line made of the padding alone.
#[must_use]
pub fn left_pad_lines(text: &str, left_pad: usize) -> String {
    let pad = " ".repeat(left_pad);
    text.split('\n')
        .map(|line| format!("{pad}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fit a single line into exactly `max_width` cells, the `left_pad` leading
/// spaces included.
///
/// Narrow content is filled with trailing spaces, wide content is cut and
/// ends with `…`. Escapes of the cut-off part trail the ellipsis. When not
/// even the ellipsis fits, the content is replaced by spaces.
///
/// # Example
/// ```
/// use term_text::left_pad_max_line;
///
/// assert_eq!(left_pad_max_line("foo", 10, 2), "  foo     ");
/// assert_eq!(left_pad_max_line("foofoofoo", 6, 2), "  foo…");
/// ```
#[must_use]
pub fn left_pad_max_line(line: &str, max_width: usize, left_pad: usize) -> String {
    let mut out = " ".repeat(left_pad);
    let room = max_width.saturating_sub(left_pad);
    if room == 0 {
        return out;
    }

    let (cleaned, escapes) = extract_escapes(line);
    let width = display_width(&cleaned);

    if width <= room {
        out.push_str(line);
        out.extend(std::iter::repeat_n(' ', room - width));
        return out;
    }

    let ellipsis_width = char_width(ELLIPSIS);
    if room < ellipsis_width {
        out.extend(std::iter::repeat_n(' ', room));
        return out;
    }

    let keep = isize::try_from(room - ellipsis_width).unwrap_or(isize::MAX);
    let (kept, _) = split_by_width(&cleaned, keep);
    let mut body = String::with_capacity(kept.len() + ELLIPSIS.len_utf8());
    body.push_str(kept);
    body.push(ELLIPSIS);
    out.push_str(&reinsert_escapes(&body, &escapes));
    out
}
