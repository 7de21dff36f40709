#![no_main]

use arbitrary::Unstructured;
use libfuzzer_sys::fuzz_target;
use term_text::{Alignment, display_width, wrap_with_indent_align};

fuzz_target!(|data: &[u8]| {
    let mut input = Unstructured::new(data);
    let (Ok(width), Ok(indent), Ok(pad), Ok(align)) = (
        input.int_in_range(0u16..=300),
        input.int_in_range(0usize..=40),
        input.int_in_range(0usize..=40),
        input.choose(&[
            Alignment::None,
            Alignment::Left,
            Alignment::Center,
            Alignment::Right,
        ]),
    ) else {
        return;
    };
    let Ok(text) = std::str::from_utf8(input.take_rest()) else {
        return;
    };
    // Cap length to keep fuzzing fast.
    if text.len() > 2048 {
        return;
    }

    let width = usize::from(width);
    let indent = " ".repeat(indent);
    let pad = " ".repeat(pad);

    let (out, lines) = wrap_with_indent_align(text, width, &indent, &pad, *align);
    assert_eq!(lines, out.split('\n').count());

    // With room left by both decorations, every line fits, except a wide
    // rune forced alone into a single free cell.
    if indent.len().max(pad.len()) < width {
        for line in out.split('\n') {
            let w = display_width(line);
            assert!(
                w <= width + 1,
                "Wrapped line exceeds width {width}: width={w} {line:?}"
            );
        }
    }
});
