//! Cell width of runes and escape-laden strings.
//!
//! Widths are counted per rune: 2 for East-Asian wide and fullwidth glyphs,
//! 0 for combining marks, zero-width and control characters, 1 otherwise.
//! Ambiguous-width runes follow [`crate::config::ambiguous_width`]. Escape
//! runs contribute nothing.

use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;

use lru::LruCache;
use rustc_hash::FxHasher;
use unicode_width::UnicodeWidthChar;

use crate::config::{AmbiguousWidth, ambiguous_width};
use crate::escape::{ESC, EscapeDetector};

/// Terminal cell width of a single rune.
///
/// # Example
/// ```
/// use term_text::char_width;
///
/// assert_eq!(char_width('a'), 1);
/// assert_eq!(char_width('快'), 2);
/// assert_eq!(char_width('\u{0301}'), 0); // combining acute
/// assert_eq!(char_width('…'), 1);
/// ```
#[inline]
#[must_use]
pub fn char_width(ch: char) -> usize {
    let width = match ambiguous_width() {
        AmbiguousWidth::Narrow => UnicodeWidthChar::width(ch),
        AmbiguousWidth::Wide => UnicodeWidthChar::width_cjk(ch),
    };
    width.unwrap_or(0)
}

/// Display width of `text` in cells, ignoring escape runs.
///
/// An unterminated escape run swallows the rest of the text, which then
/// measures 0.
///
/// # Performance
/// - Escape-free ASCII: a byte scan, no rune decoding.
/// - Otherwise: one pass of the escape detector.
#[must_use]
pub fn display_width(text: &str) -> usize {
    if text.is_ascii() && !text.as_bytes().contains(&(ESC as u8)) {
        return text.bytes().filter(|b| (0x20..0x7f).contains(b)).count();
    }

    let mut detector = EscapeDetector::new();
    text.chars()
        .filter(|&ch| {
            detector.witness(ch);
            !detector.in_escape()
        })
        .map(char_width)
        .sum()
}

/// Width of the widest `\n`-separated line of `text`.
#[must_use]
pub fn max_line_width(text: &str) -> usize {
    text.split('\n').map(display_width).max().unwrap_or(0)
}

// ---------------------------------------------------------------------------
// WidthCache: LRU memo for repeated measurements
// ---------------------------------------------------------------------------

/// Statistics for the width cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WidthCacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that measured the text.
    pub misses: u64,
    /// Current number of entries.
    pub size: usize,
    /// Maximum number of entries.
    pub capacity: usize,
}

impl WidthCacheStats {
    /// Hit rate as a fraction (0.0 to 1.0).
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Key of a cached measurement: the text's FxHash plus its byte length,
/// which keeps accidental hash collisions between different lengths apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct WidthKey {
    text_hash: u64,
    text_len: usize,
}

impl WidthKey {
    fn new(text: &str) -> Self {
        let mut hasher = FxHasher::default();
        text.hash(&mut hasher);
        Self {
            text_hash: hasher.finish(),
            text_len: text.len(),
        }
    }
}

/// LRU cache of [`display_width`] results.
///
/// Table and column layouts measure the same cell strings over and over;
/// this keeps the most recent measurements around.
///
/// The cache is not `Sync`. Use one per thread, or wrap it in a `Mutex`.
///
/// # Example
/// ```
/// use term_text::WidthCache;
///
/// let mut cache = WidthCache::new(64);
/// assert_eq!(cache.get_or_compute("\x1b[1m快\x1b[0m"), 2);
/// assert_eq!(cache.get_or_compute("\x1b[1m快\x1b[0m"), 2);
/// assert_eq!(cache.stats().hits, 1);
/// ```
pub struct WidthCache {
    cache: LruCache<WidthKey, usize>,
    stats: WidthCacheStats,
}

impl std::fmt::Debug for WidthCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidthCache")
            .field("stats", &self.stats())
            .finish_non_exhaustive()
    }
}

impl WidthCache {
    /// Create a cache holding up to `capacity` measurements (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(cap),
            stats: WidthCacheStats {
                capacity: cap.get(),
                ..Default::default()
            },
        }
    }

    /// Width of `text`, measured at most once while it stays cached.
    pub fn get_or_compute(&mut self, text: &str) -> usize {
        let key = WidthKey::new(text);
        if let Some(&width) = self.cache.get(&key) {
            self.stats.hits += 1;
            return width;
        }

        self.stats.misses += 1;
        let width = display_width(text);
        self.cache.put(key, width);
        width
    }

    /// Drop every entry and reset the statistics.
    pub fn clear(&mut self) {
        self.cache.clear();
        self.stats = WidthCacheStats {
            capacity: self.stats.capacity,
            ..Default::default()
        };
    }

    /// Change the capacity, evicting least recently used entries if needed.
    pub fn resize(&mut self, capacity: usize) {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        self.cache.resize(cap);
        self.stats.capacity = cap.get();
    }

    #[inline]
    #[must_use]
    pub fn stats(&self) -> WidthCacheStats {
        WidthCacheStats {
            size: self.cache.len(),
            ..self.stats
        }
    }
}

impl Default for WidthCache {
    fn default() -> Self {
        Self::new(1024)
    }
}
