#![forbid(unsafe_code)]

//! Escape-aware word wrapping.
//!
//! Wrapping works in two layers:
//! - [`softwrap_line`] inserts `\n` into a single line so that no segment
//!   exceeds a width, removing nothing;
//! - the paragraph wrappers ([`wrap`] up to [`wrap_with_indent_align`]) run
//!   it on every source line, trim the segments, and prefix each output line
//!   with an indent (first line) or a pad (every other line).
//!
//! Escape runs are lifted out before breaking and spliced back afterwards,
//! so they never count toward the width and never get split.
//!
//! # Example
//! ```
//! use term_text::{wrap_with_indent, display_width};
//!
//! let (out, lines) = wrap_with_indent("The quick brown fox jumps over", 14, "- ", "  ");
//! assert_eq!(out, "- The quick\n  brown fox\n  jumps over");
//! assert_eq!(lines, 3);
//! assert!(out.lines().all(|l| display_width(l) <= 14));
//! ```

use crate::align::{Alignment, align_line};
use crate::escape::{EscapeDetector, extract_escapes, reinsert_escapes};
use crate::segment::segment_line;
use crate::trim::trim_escaped;
use crate::width::{char_width, display_width};

/// Tabs are expanded to this many spaces before wrapping.
const TAB_EXPANSION: &str = "    ";

#[inline]
fn cells(width: usize) -> isize {
    isize::try_from(width).unwrap_or(isize::MAX)
}

// ---------------------------------------------------------------------------
// Paragraph wrappers
// ---------------------------------------------------------------------------

/// Wrap `text` so that no line is wider than `width` cells.
///
/// Returns the wrapped text and its number of lines. Explicit `\n` are
/// preserved, whitespace at break points is dropped.
#[must_use]
pub fn wrap(text: &str, width: usize) -> (String, usize) {
    wrap_left_padded(text, width, 0)
}

/// [`wrap`] with every line prefixed by `left_pad` spaces.
///
/// The padding counts toward `width`.
#[must_use]
pub fn wrap_left_padded(text: &str, width: usize, left_pad: usize) -> (String, usize) {
    let pad = " ".repeat(left_pad);
    wrap_with_pad(text, width, &pad)
}

/// [`wrap`] with every line prefixed by `pad`, which may hold escapes.
#[must_use]
pub fn wrap_with_pad(text: &str, width: usize, pad: &str) -> (String, usize) {
    wrap_with_indent(text, width, pad, pad)
}

/// [`wrap`] with the first line prefixed by `indent` and every other line by
/// `pad`.
///
/// A short indent and a long pad give a hanging indent; the reverse gives a
/// first-line indent.
#[must_use]
pub fn wrap_with_indent(text: &str, width: usize, indent: &str, pad: &str) -> (String, usize) {
    wrap_with_indent_align(text, width, indent, pad, Alignment::None)
}

/// The general paragraph wrapper.
///
/// Each line's content is aligned within the room its decoration (indent or
/// pad) leaves, then prefixed with the decoration.
///
/// Segments are trimmed of whitespace around them, escapes ignored: the
/// first segment of a source line on the right only, later ones on both
/// sides. Blank source lines become the decoration with its trailing spaces
/// removed. When a visible decoration is as wide as `width` or wider, it is
/// emitted on a line of its own: a too-wide indent hands over to the pad,
/// and a too-wide pad leaves the content to be emitted undecorated, one rune
/// per line. A `width` of 0 with empty decorations splits per rune.
#[must_use]
pub fn wrap_with_indent_align(
    text: &str,
    width: usize,
    indent: &str,
    pad: &str,
    align: Alignment,
) -> (String, usize) {
    let text = text.replace('\t', TAB_EXPANSION);
    let width = cells(width);
    let mut lines: Vec<String> = Vec::new();

    for (index, line) in text.split('\n').enumerate() {
        let mut decoration = if index == 0 { indent } else { pad };

        if line.trim().is_empty() {
            lines.push(decoration.trim_end_matches(' ').to_string());
            continue;
        }

        let mut rest = line;
        let mut on_pad = index != 0;
        loop {
            let decoration_width = display_width(decoration);
            let budget = width - cells(decoration_width);

            if budget <= 0 && decoration_width > 0 {
                tracing::debug!(
                    width,
                    decoration_width,
                    on_pad,
                    "decoration leaves no room for text"
                );
                lines.push(decoration.to_string());
                if !on_pad {
                    decoration = pad;
                    on_pad = true;
                    continue;
                }
                let wrapped = softwrap_line(rest, budget);
                lines.extend(wrapped.split('\n').map(|seg| trim_escaped(seg, true, true).text));
                break;
            }

            let room = usize::try_from(budget).unwrap_or(0);
            let wrapped = softwrap_line(rest, budget);

            if !on_pad {
                if let Some((head, _)) = wrapped.split_once('\n') {
                    // first line broke: it keeps the indent, the rest of the
                    // source line is wrapped again against the pad
                    let first = trim_escaped(head, false, true);
                    lines.push(decorate(decoration, &first.text, room, align));
                    rest = rest
                        .strip_prefix(head)
                        .unwrap_or_default()
                        .trim_start_matches(' ');
                    decoration = pad;
                    on_pad = true;
                    continue;
                }
            }

            for (j, seg) in wrapped.split('\n').enumerate() {
                // escape-aware: a style opened right before the spaces a
                // break left behind must not keep them alive
                let content = trim_escaped(seg, j != 0, true);
                lines.push(decorate(decoration, &content.text, room, align));
            }
            break;
        }
    }

    let count = lines.len();
    (lines.join("\n"), count)
}

fn decorate(decoration: &str, content: &str, room: usize, align: Alignment) -> String {
    let aligned = align_line(content, room, align);
    let mut out = String::with_capacity(decoration.len() + aligned.len());
    out.push_str(decoration);
    out.push_str(&aligned);
    out
}

// ---------------------------------------------------------------------------
// Single-line breaking
// ---------------------------------------------------------------------------

/// Insert `\n` into `line` so that every segment is at most `width` cells.
///
/// Nothing is removed: dropping the inserted breaks gives `line` back.
/// Breaks go between chunks (see [`crate::segment_line`]). A chunk wider
/// than `width` is split to fill the current segment; when not even one rune
/// fits an empty segment, one rune is placed anyway so wrapping always
/// progresses.
///
/// The line must not contain `\n`.
///
/// # Example
/// ```
/// use term_text::softwrap_line;
///
/// assert_eq!(softwrap_line("foo bar baz", 4), "foo \nbar \nbaz");
/// assert_eq!(softwrap_line("foobarbaz", 4), "foob\narba\nz");
/// ```
#[must_use]
pub fn softwrap_line(line: &str, width: isize) -> String {
    let (cleaned, escapes) = extract_escapes(line);

    let mut stack = segment_line(&cleaned);
    stack.reverse();

    let mut out = String::with_capacity(cleaned.len() + cleaned.len() / 8);
    let mut used: isize = 0;

    while let Some(chunk) = stack.pop() {
        let chunk_width = cells(display_width(chunk));

        if used + chunk_width <= width {
            out.push_str(chunk);
            used += chunk_width;
            if used == width && !stack.is_empty() {
                out.push('\n');
                used = 0;
            }
        } else if chunk_width > width {
            let mut budget = width - used;
            // spaces left over at the start of a segment are trimmed later,
            // so they must not eat into the room of the word after them
            if used > 0 && starts_fresh_segment(&out, used) {
                budget += used;
            }

            let (left, right) = split_by_width(chunk, budget);
            if left.is_empty() {
                if used > 0 {
                    out.push('\n');
                    used = 0;
                    stack.push(chunk);
                    continue;
                }
                let first = chunk.chars().next().map_or(0, char::len_utf8);
                let (left, right) = chunk.split_at(first);
                tracing::trace!(width, rune = left, "rune wider than line placed alone");
                out.push_str(left);
                used += cells(display_width(left));
                if !right.is_empty() {
                    stack.push(right);
                    out.push('\n');
                    used = 0;
                }
                continue;
            }

            out.push_str(left);
            if right.is_empty() {
                used += cells(display_width(left));
            } else {
                stack.push(right);
                out.push('\n');
                used = 0;
            }
        } else {
            out.push('\n');
            used = 0;
            stack.push(chunk);
        }
    }

    reinsert_escapes(&out, &escapes)
}

/// The current segment of `out` holds nothing but `used` spaces.
///
/// Only spaces left behind by a break count: leading spaces of the line
/// itself are content and keep their width.
fn starts_fresh_segment(out: &str, used: isize) -> bool {
    let Ok(spaces) = usize::try_from(used) else {
        return false;
    };
    let bytes = out.as_bytes();
    let Some(at) = bytes.len().checked_sub(spaces + 1) else {
        return false;
    };
    bytes[at] == b'\n' && bytes[at + 1..].iter().all(|&b| b == b' ')
}

/// Split `word` so the left part holds as many runes as fit in `width`
/// cells.
///
/// Escape runs are carried along without counting. Once the budget is
/// exhausted, any escape run that follows goes to the right part. A wide
/// rune that would overflow the budget is left out even if one cell remains.
/// A non-positive `width` leaves everything on the right.
///
/// # Example
/// ```
/// use term_text::split_by_width;
///
/// assert_eq!(split_by_width("foobarHoy", 4), ("foob", "arHoy"));
/// assert_eq!(split_by_width("快檢什麼", 5), ("快檢", "什麼"));
/// ```
#[must_use]
pub fn split_by_width(word: &str, width: isize) -> (&str, &str) {
    let Ok(budget) = usize::try_from(width) else {
        return ("", word);
    };
    if budget == 0 {
        return ("", word);
    }

    let mut detector = EscapeDetector::new();
    let mut used = 0;
    let mut end = 0;

    for (idx, ch) in word.char_indices() {
        detector.witness(ch);
        if detector.in_escape() {
            end = idx + ch.len_utf8();
            continue;
        }
        let w = char_width(ch);
        if used + w > budget {
            break;
        }
        used += w;
        end = idx + ch.len_utf8();
        if used >= budget {
            break;
        }
    }

    word.split_at(end)
}
