//! A tiny syntax highlighter that works for most languages without knowing any of them.
//!
//! Text is split into tokens by a single forward pass that only looks a few characters
//! around the cursor. Each token falls into one of a handful of categories (keywords,
//! punctuation, strings and regex literals, comments), and every category is painted
//! with a variant of one foreground color, composited over the background:
//!
//! ```
//! let html = glint::highlight("if (x) return 'hi'; // done");
//! assert!(html.contains("font-style: italic\">// done</span>"));
//! ```
//!
//! The result is an HTML fragment of escaped text and `<span style="...">` elements.
//! Highlighting never fails: unterminated strings and comments simply run to the end of
//! the input.

pub mod color;
pub mod error;
pub mod highlighter;
pub mod keywords;
pub mod scanner;
pub mod style;
pub mod tokens;
pub mod util;

pub use color::{blend, Rgba};
pub use error::Error;
pub use highlighter::Highlighter;
pub use keywords::{default_keywords, Keywords};
pub use scanner::Scanner;
pub use style::{compute_styles, Style, StyleGroup, Styles};
pub use tokens::{Category, Token};
pub use util::escape_html;

/// Highlight text with an opaque black foreground over a transparent background
pub fn highlight(text: &str) -> String {
    highlight_with(text, Rgba::OPAQUE_BLACK, Rgba::TRANSPARENT_WHITE)
}

/// Highlight text with the given foreground and background colors
pub fn highlight_with(text: &str, fg: Rgba, bg: Rgba) -> String {
    Highlighter {
        fg,
        bg,
        keywords: default_keywords(),
    }
    .run(text)
}
