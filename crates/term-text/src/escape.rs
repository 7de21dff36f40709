//! Terminal escape runs: detection, extraction and reinsertion.
//!
//! An escape run starts at `ESC` (0x1B) and ends at the next `m`. Runs are
//! opaque: their parameters are never interpreted. Layout code works on the
//! escape-free text (the "arena") and keeps the runs aside as
//! [`EscapeItem`]s, each tagged with the rune offset in the clean text where
//! it belongs.
//!
//! # Example
//! ```
//! use term_text::{extract_escapes, reinsert_escapes};
//!
//! let line = "This \x1b[31mis an\x1b[0m example.";
//! let (cleaned, items) = extract_escapes(line);
//! assert_eq!(cleaned, "This is an example.");
//! assert_eq!(items[0].position, 5);
//! assert_eq!(reinsert_escapes(&cleaned, &items), line);
//! ```

use smallvec::SmallVec;

/// The byte that opens an escape run.
pub const ESC: char = '\x1b';

/// The rune that closes an escape run.
const ESCAPE_END: char = 'm';

/// Per-rune state machine telling whether the current rune belongs to an
/// escape run.
///
/// Feed runes one at a time with [`witness`](Self::witness), then query the
/// observations for the rune just witnessed. An unterminated run leaves the
/// detector in escape mode for good.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EscapeDetector {
    in_escape: bool,
    started: bool,
    ended: bool,
}

impl EscapeDetector {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            in_escape: false,
            started: false,
            ended: false,
        }
    }

    /// Advance the automaton by one rune.
    pub fn witness(&mut self, ch: char) {
        self.started = false;
        if self.ended {
            self.in_escape = false;
            self.ended = false;
        }
        if ch == ESC {
            self.in_escape = true;
            self.started = true;
        } else if self.in_escape && ch == ESCAPE_END {
            self.ended = true;
        }
    }

    /// The last witnessed rune is part of an escape run (delimiters included).
    #[inline]
    #[must_use]
    pub const fn in_escape(&self) -> bool {
        self.in_escape
    }

    /// The last witnessed rune opened an escape run.
    #[inline]
    #[must_use]
    pub const fn started(&self) -> bool {
        self.started
    }

    /// The last witnessed rune closed an escape run.
    #[inline]
    #[must_use]
    pub const fn ended(&self) -> bool {
        self.ended
    }
}

/// An escape run lifted out of a line.
///
/// `position` is the rune index in the escape-free text before which `code`
/// is reinserted. It may fall outside the text after an edit; reinsertion
/// clamps it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapeItem {
    pub code: String,
    pub position: isize,
}

impl EscapeItem {
    #[must_use]
    pub fn new(code: impl Into<String>, position: isize) -> Self {
        Self {
            code: code.into(),
            position,
        }
    }
}

/// Escape items of one line, in extraction order.
pub type EscapeItems = SmallVec<[EscapeItem; 4]>;

/// Split a line into its escape-free text and the escape runs it contained.
///
/// Reinserting the returned items into the returned text with
/// [`reinsert_escapes`] reproduces `line` exactly. An unterminated run at
/// the end of the line is kept as a final item.
///
/// Like reinsertion, positions do not count `\n` runes. Multi-line input is
/// accepted, but a run sitting right before a line break comes back after
/// it; wrapping code splits paragraphs first.
#[must_use]
pub fn extract_escapes(line: &str) -> (String, EscapeItems) {
    let mut cleaned = String::with_capacity(line.len());
    let mut items = EscapeItems::new();
    let mut pending = String::new();
    let mut position: isize = 0;
    let mut detector = EscapeDetector::new();

    for ch in line.chars() {
        detector.witness(ch);
        if detector.started() && !pending.is_empty() {
            // a new ESC interrupted a run that never saw its `m`
            items.push(EscapeItem::new(std::mem::take(&mut pending), position));
        }
        if detector.in_escape() {
            pending.push(ch);
            if detector.ended() {
                items.push(EscapeItem::new(std::mem::take(&mut pending), position));
            }
        } else {
            cleaned.push(ch);
            if ch != '\n' {
                position += 1;
            }
        }
    }

    if !pending.is_empty() {
        tracing::trace!(
            escape_len = pending.len(),
            position,
            "unterminated escape run kept at end of line"
        );
        items.push(EscapeItem::new(pending, position));
    }

    (cleaned, items)
}

/// Splice escape items back into escape-free text.
///
/// The only edit `cleaned` may have gone through since extraction is the
/// insertion of `\n` runes. A break does not advance the rune cursor, and
/// items due at a break are written after it, so they open the next line
/// instead of dangling at the end of the previous one. Items before the
/// start are written first; items past the end trail the text.
#[must_use]
pub fn reinsert_escapes(cleaned: &str, items: &[EscapeItem]) -> String {
    if items.is_empty() {
        return cleaned.to_string();
    }

    let mut ordered: SmallVec<[&EscapeItem; 8]> = items.iter().collect();
    // stable: items sharing a position keep their relative order
    ordered.sort_by_key(|item| item.position);

    let extra: usize = items.iter().map(|item| item.code.len()).sum();
    let mut out = String::with_capacity(cleaned.len() + extra);
    let mut pending = ordered.into_iter().peekable();
    let mut cursor: isize = 0;

    for ch in cleaned.chars() {
        if ch == '\n' {
            out.push('\n');
        }
        while let Some(item) = pending.next_if(|item| item.position <= cursor) {
            out.push_str(&item.code);
        }
        if ch != '\n' {
            out.push(ch);
            cursor += 1;
        }
    }

    for item in pending {
        out.push_str(&item.code);
    }

    out
}

/// Shift every item by `delta` runes.
#[must_use]
pub fn offset_items(items: &[EscapeItem], delta: isize) -> EscapeItems {
    items
        .iter()
        .map(|item| EscapeItem::new(item.code.clone(), item.position + delta))
        .collect()
}

/// Clamp every item into `[0, len]`.
#[must_use]
pub fn clamp_items(items: &[EscapeItem], len: usize) -> EscapeItems {
    let upper = isize::try_from(len).unwrap_or(isize::MAX);
    items
        .iter()
        .map(|item| EscapeItem::new(item.code.clone(), item.position.clamp(0, upper)))
        .collect()
}
