use crate::color::Rgba;
use crate::error::Error;
use crate::keywords::{self, default_keywords, Keywords};
use crate::scanner::Scanner;
use crate::style::{compute_styles, Styles};
use crate::tokens::Token;
use crate::util::escape_html;
use regex::Regex;
use tracing::debug;

/// For performing highlighting operations.
///
/// Holds the colors and the keyword set. It is never modified by highlighting, so one
/// highlighter can be shared and used for any number of documents.
#[derive(Debug, Clone)]
pub struct Highlighter<K = Regex> {
    pub fg: Rgba,
    pub bg: Rgba,
    pub keywords: K,
}

impl Highlighter {
    /// Creates a new highlighter with an opaque black foreground, a transparent white
    /// background and the default keyword set
    pub fn new() -> Self {
        Self {
            fg: Rgba::OPAQUE_BLACK,
            bg: Rgba::TRANSPARENT_WHITE,
            keywords: default_keywords().clone(),
        }
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Keywords> Highlighter<K> {
    /// Set the color that every style is derived from
    #[must_use]
    pub fn foreground(self, fg: Rgba) -> Self {
        Self { fg, ..self }
    }

    /// Set the color the text is drawn over
    #[must_use]
    pub fn background(self, bg: Rgba) -> Self {
        Self { bg, ..self }
    }

    /// Replace the keyword set
    pub fn keywords<T: Keywords>(self, keywords: T) -> Highlighter<T> {
        Highlighter {
            fg: self.fg,
            bg: self.bg,
            keywords,
        }
    }

    /// Replace the keyword set with a regular expression, which should be anchored
    pub fn keyword_pattern(self, pattern: &str) -> Result<Highlighter<Regex>, Error> {
        Ok(self.keywords(keywords::from_pattern(pattern)?))
    }

    /// Replace the keyword set with a list of words
    pub fn keyword_list(self, words: &[&str]) -> Result<Highlighter<Regex>, Error> {
        Ok(self.keywords(keywords::from_words(words)?))
    }

    /// The finished styles for the configured colors
    pub fn styles(&self) -> Styles {
        compute_styles(self.fg, self.bg)
    }

    /// Split text into categorised tokens without rendering them
    pub fn tokens(&self, text: &str) -> Scanner {
        Scanner::new(text)
    }

    /// Highlight text, producing an HTML fragment of escaped text and styled spans.
    ///
    /// There is no wrapping element; embed the result in something like `<pre>`.
    ///
    /// # Example
    /// ```
    /// let h = glint::Highlighter::new();
    /// let html = h.run("x = 1");
    /// assert!(html.starts_with("x <span style=\""));
    /// ```
    pub fn run(&self, text: &str) -> String {
        let styles = self.styles();
        let mut output = String::with_capacity(text.len() * 2);
        for token in Scanner::new(text) {
            self.render(&token, &styles, &mut output);
        }
        debug!(input = text.len(), output = output.len(), "highlighted");
        output
    }

    /// Append one token to the output, wrapped in a span if its category is styled
    fn render(&self, token: &Token, styles: &Styles, output: &mut String) {
        let group = token
            .category
            .style_group(|| self.keywords.is_keyword(&token.text));
        let text = escape_html(&token.text);
        match group {
            Some(group) => {
                output.push_str("<span style=\"");
                output.push_str(styles.get(group));
                output.push_str("\">");
                output.push_str(&text);
                output.push_str("</span>");
            }
            None => output.push_str(&text),
        }
    }
}
