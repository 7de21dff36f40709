#![forbid(unsafe_code)]

//! Escape-aware text layout for terminals.
//!
//! # Role
//! `term-text` measures and re-flows strings that mix multi-byte Unicode
//! (including double-cell CJK glyphs) with ANSI color/style escapes. Escape
//! runs (`ESC` through the next `m`) are opaque and zero-width: they are
//! lifted out before a transformation and spliced back in afterwards, so
//! colors follow the words they decorate.
//!
//! # Primary responsibilities
//! - **Width**: [`display_width`], [`max_line_width`], [`WidthCache`].
//! - **Escapes**: [`extract_escapes`], [`reinsert_escapes`], [`offset_items`].
//! - **Wrapping**: [`wrap`] and friends, down to [`wrap_with_indent_align`].
//! - **Alignment**: [`align_line`] and the per-mode variants.
//! - **Trim/truncate/pad**: [`trim_space`], [`truncate_max`],
//!   [`left_pad_lines`], [`left_pad_max_line`].
//!
//! # Example
//! ```
//! use term_text::{wrap, display_width};
//!
//! let (out, lines) = wrap("foo \x1b[31mbar\x1b[0m baz", 4);
//! assert_eq!(out, "foo\n\x1b[31mbar\x1b[0m\nbaz");
//! assert_eq!(lines, 3);
//! assert_eq!(display_width("\x1b[31mbar\x1b[0m"), 3);
//! ```
//!
//! # Ambiguous-width glyphs
//! Characters such as `…` or `→` are East-Asian "ambiguous". They are measured
//! as one cell unless the process opts in to wide measurement, either through
//! `TERM_TEXT_CJK_WIDTH=1` or [`set_ambiguous_width`] before the first
//! measurement. See [`config`].

pub mod align;
pub mod config;
pub mod escape;
pub mod segment;
pub mod trim;
pub mod width;
pub mod wrap;

pub use align::{Alignment, align_center, align_left, align_line, align_right};
pub use config::{AmbiguousWidth, ConfigError, ambiguous_width, set_ambiguous_width};
pub use escape::{
    EscapeDetector, EscapeItem, EscapeItems, clamp_items, extract_escapes, offset_items,
    reinsert_escapes,
};
pub use segment::{BreakCategory, segment_line};
pub use trim::{left_pad_lines, left_pad_max_line, trim_space, truncate_max};
pub use width::{WidthCache, WidthCacheStats, char_width, display_width, max_line_width};
pub use wrap::{
    softwrap_line, split_by_width, wrap, wrap_left_padded, wrap_with_indent,
    wrap_with_indent_align, wrap_with_pad,
};

/// The ellipsis glyph appended by truncating operations.
pub const ELLIPSIS: char = '…';
