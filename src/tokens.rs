use crate::style::StyleGroup;

/// The lexical category a token belongs to.
///
/// Exactly one category is active at any point of a scan, and it only changes at token
/// boundaries.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Category {
    /// Whitespace, newlines and anything unrecognised
    Plain,
    /// Operators and opening braces, after which a `/` starts a regex
    Operator,
    /// `]` and `)`, after which a `/` is division
    ClosingBrace,
    /// Identifiers and keywords
    Word,
    /// A `/.../` regex literal
    Regex,
    /// A string delimited by `"`
    DoubleQuoted,
    /// A string delimited by `'`
    SingleQuoted,
    /// An `<!-- -->` comment
    XmlComment,
    /// A `/* */` comment
    BlockComment,
    /// A `//` comment running to the end of the line
    SlashComment,
    /// A `#` comment running to the end of the line
    HashComment,
}

impl Category {
    /// Whether this category counts when deciding if a `/` opens a regex.
    /// Whitespace and comments are skipped over.
    pub fn is_significant(self) -> bool {
        !matches!(self, Category::Plain) && !self.is_comment()
    }

    pub fn is_comment(self) -> bool {
        matches!(
            self,
            Category::XmlComment
                | Category::BlockComment
                | Category::SlashComment
                | Category::HashComment
        )
    }

    /// Backslashes escape the following character everywhere except inside comments
    pub fn is_escapable(self) -> bool {
        !self.is_comment()
    }

    /// Works out which style group a token of this category is painted with.
    ///
    /// Words only receive a style when they are keywords; `is_keyword` is consulted for
    /// that case alone.
    pub fn style_group(self, is_keyword: impl FnOnce() -> bool) -> Option<StyleGroup> {
        match self {
            Category::Plain => None,
            Category::Operator | Category::ClosingBrace => Some(StyleGroup::Punctuation),
            Category::Word => is_keyword().then_some(StyleGroup::Keyword),
            Category::Regex | Category::DoubleQuoted | Category::SingleQuoted => {
                Some(StyleGroup::String)
            }
            Category::XmlComment
            | Category::BlockComment
            | Category::SlashComment
            | Category::HashComment => Some(StyleGroup::Comment),
        }
    }
}

/// A single token produced by the scanner, e.g. `Token { text: "// hi", category: SlashComment }`
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub text: String,
    pub category: Category,
}

impl Token {
    pub fn new<S: Into<String>>(text: S, category: Category) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }

    /// Returns the length of the token in characters
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Determines if the token is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
