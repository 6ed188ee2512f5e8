/// Errors raised while configuring a highlighter.
///
/// Highlighting itself never fails; only building keyword sets and parsing colors can.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid keyword pattern: {0}")]
    InvalidKeywordPattern(#[from] regex::Error),
    #[error("invalid color: {0:?}")]
    InvalidColor(String),
}
