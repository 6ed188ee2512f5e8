//! The single-pass scanner.
//!
//! Text is walked left to right exactly once. Only a small window around the cursor is
//! consulted (up to three characters back and three ahead), together with the category of
//! the last significant token, which is what separates a regex from a division.

use crate::tokens::{Category, Token};
use if_chain::if_chain;
use tracing::trace;

/// Characters that make up identifiers and keywords
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Whitespace as understood by most regex engines, which includes the byte order mark
/// but not the C1 next-line control
pub fn is_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Characters that form single character operator and opening brace tokens
pub const OPERATORS: &str = "/{}[(-+*=<>:;|\\.,?!&@~";

/// The characters surrounding the cursor at the moment a boundary is tested.
///
/// `prev` has already been masked when it was escaped by a backslash, in which case it is
/// `None` and can never match a delimiter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window<'a> {
    pub chars: &'a [char],
    /// Index of `current` within `chars`
    pub pos: usize,
    pub current: Option<char>,
    pub prev: Option<char>,
    pub prev2: Option<char>,
}

impl Window<'_> {
    /// Look at the character `offset` places after the current one
    pub fn ahead(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    /// Look at the character `offset` places before the current one, unmasked
    pub fn behind(&self, offset: usize) -> Option<char> {
        self.pos.checked_sub(offset).and_then(|i| self.chars.get(i).copied())
    }

    fn starts_with(&self, pattern: &str) -> bool {
        let mut i = self.pos;
        for p in pattern.chars() {
            if self.chars.get(i) != Some(&p) {
                return false;
            }
            i += 1;
        }
        true
    }
}

/// Decides whether the token of `category` ends before the current character.
///
/// `multichar` is true when the token already holds more than one character. The end of
/// input always ends a token.
pub fn is_boundary(category: Category, window: &Window, multichar: bool) -> bool {
    let Some(c) = window.current else { return true };
    match category {
        // Whitespace is merged together
        Category::Plain => !is_space(c),
        Category::Operator | Category::ClosingBrace => true,
        Category::Word => !is_word_char(c),
        Category::Regex => matches!(window.prev, Some('/' | '\n')) && multichar,
        Category::DoubleQuoted => window.prev == Some('"') && multichar,
        Category::SingleQuoted => window.prev == Some('\'') && multichar,
        Category::XmlComment => {
            window.behind(3) == Some('-') && window.prev2 == Some('-') && window.prev == Some('>')
        }
        Category::BlockComment => window.prev2 == Some('*') && window.prev == Some('/'),
        Category::SlashComment | Category::HashComment => c == '\n',
    }
}

/// Works out the category of a token starting at the current character.
///
/// The order of the tests matters, e.g. `#` must be a comment before it could be anything
/// else, and `//` must be a comment before `/` is considered as a regex.
pub fn classify(window: &Window, last_significant: Option<Category>) -> Category {
    let Some(c) = window.current else { return Category::Plain };
    let next = window.ahead(1);
    if c == '#' {
        return Category::HashComment;
    }
    if c == '/' && next == Some('/') {
        return Category::SlashComment;
    }
    if c == '/' && next == Some('*') {
        return Category::BlockComment;
    }
    if window.starts_with("<!--") {
        return Category::XmlComment;
    }
    if c == '\'' {
        return Category::SingleQuoted;
    }
    if c == '"' {
        return Category::DoubleQuoted;
    }
    if_chain! {
        if c == '/';
        // After a value or a closing brace this is division
        if last_significant == Some(Category::Operator);
        // Closing tags in markup, e.g. </div>
        if window.prev != Some('<');
        then {
            return Category::Regex;
        }
    }
    if is_word_char(c) {
        Category::Word
    } else if c == ']' || c == ')' {
        Category::ClosingBrace
    } else if OPERATORS.contains(c) {
        Category::Operator
    } else {
        Category::Plain
    }
}

/// Splits text into categorised tokens.
///
/// This is a one-shot iterator: it walks the text once and yields each non-empty token as
/// soon as its boundary is found. Concatenating the yielded texts gives back the input.
#[derive(Debug, Clone)]
pub struct Scanner {
    chars: Vec<char>,
    /// Index of the next character to become current
    pos: usize,
    current: Option<char>,
    prev: Option<char>,
    prev2: Option<char>,
    token: String,
    token_len: usize,
    category: Category,
    last_significant: Option<Category>,
    done: bool,
}

impl Scanner {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
            current: None,
            prev: None,
            prev2: None,
            token: String::new(),
            token_len: 0,
            category: Category::Plain,
            last_significant: None,
            done: false,
        }
    }

    /// The category of the most recent significant token seen so far
    pub fn last_significant(&self) -> Option<Category> {
        self.last_significant
    }

    /// Moves the cursor one character forward, returning a token if one was completed
    fn step(&mut self) -> Option<Token> {
        self.prev2 = self.prev;
        // An escaped character is hidden from the boundary tests
        self.prev = if self.category.is_escapable() && self.prev == Some('\\') {
            None
        } else {
            self.current
        };
        self.current = self.chars.get(self.pos).copied();
        let window = Window {
            chars: &self.chars,
            pos: self.pos,
            current: self.current,
            prev: self.prev,
            prev2: self.prev2,
        };
        self.pos += 1;

        let mut finished = None;
        if is_boundary(self.category, &window, self.token_len > 1) {
            let category = self.category;
            if !self.token.is_empty() {
                trace!(?category, len = self.token_len, "token");
                finished = Some(Token::new(std::mem::take(&mut self.token), category));
            }
            if category.is_significant() {
                self.last_significant = Some(category);
            }
            self.token_len = 0;
            self.category = classify(&window, self.last_significant);
        }

        match self.current {
            Some(c) => {
                self.token.push(c);
                self.token_len += 1;
            }
            None => self.done = true,
        }
        finished
    }
}

impl Iterator for Scanner {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        while !self.done {
            if let Some(token) = self.step() {
                return Some(token);
            }
        }
        None
    }
}

impl std::iter::FusedIterator for Scanner {}
