#![no_main]

use libfuzzer_sys::fuzz_target;
use term_text::{WidthCache, display_width, extract_escapes, max_line_width, reinsert_escapes};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if text.len() > 4096 {
        return;
    }

    // display_width must never panic.
    let width = display_width(text);
    if text.is_empty() {
        assert_eq!(width, 0);
    }
    let _widest = max_line_width(text);

    // Escape extraction must round-trip on a single line.
    let line = text.replace('\n', "");
    let (cleaned, items) = extract_escapes(&line);
    assert!(!cleaned.contains('\x1b'));
    assert_eq!(reinsert_escapes(&cleaned, &items), line);
    assert_eq!(display_width(&cleaned), display_width(&line));

    // WidthCache: cached width must equal direct computation.
    let mut cache = WidthCache::new(100);
    assert_eq!(cache.get_or_compute(text), width, "Cached width must match direct computation");
    assert_eq!(cache.get_or_compute(text), width, "Cache hit must return same value");
});
