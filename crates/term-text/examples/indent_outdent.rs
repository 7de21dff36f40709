//! Wrap a styled paragraph between colored indent and pad decorations.
//!
//! Run with: cargo run -p term-text --example indent_outdent [width]
//!
//! Set `RUST_LOG=term_text=debug` to see decoration diagnostics, e.g. with a
//! width of 8.

use term_text::{Alignment, max_line_width, truncate_max, wrap_with_indent_align};
use tracing_subscriber::EnvFilter;

const PARAGRAPH: &str = concat!(
    "The \x1b[1mLorem ipsum\x1b[0m text is typically composed of ",
    "pseudo-Latin words. It is commonly used as \x1b[3mplaceholder\x1b[0m",
    " text to examine or demonstrate the \x1b[9mvisual effects\x1b[0m of ",
    "various graphic design. 一只 A Quick \x1b[31m敏捷的狐 Fox ",
    "狸跳过了\x1b[0mDog一只懒狗。",
);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let width = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<usize>().ok())
        .unwrap_or(60);
    let rule = format!("|{}|", "-".repeat(width.saturating_sub(2)));

    for (title, indent, pad, align) in [
        (
            "indent",
            "\x1b[34m<-indent-> \x1b[0m",
            "\x1b[33m<-pad-> \x1b[0m",
            Alignment::None,
        ),
        ("outdent", "", "    ", Alignment::None),
        ("centered", "\x1b[34m> \x1b[0m", "\x1b[34m> \x1b[0m", Alignment::Center),
    ] {
        let (output, lines) = wrap_with_indent_align(PARAGRAPH, width, indent, pad, align);
        tracing::info!(title, lines, widest = max_line_width(&output), "wrapped");

        println!("{title}: {lines} lines");
        println!("{rule}");
        println!("{output}");
        println!("{rule}");
        println!();
    }

    println!("{}", truncate_max(PARAGRAPH, width));
}
