#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A token is the smallest unit the aligner compares: a maximal run of either
/// whitespace or non-whitespace characters.
///
/// Two tokens are equal only if their texts are byte-for-byte equal. It's
/// UTF-8 compatible.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    text: String,

    /// Whether the token consists only of whitespace characters.
    is_whitespace: bool,
}

impl From<&str> for Token {
    fn from(text: &str) -> Self { Token::new(text.to_owned()) }
}

impl Token {
    #[must_use]
    pub fn new(text: String) -> Self {
        let is_whitespace = text.chars().all(char::is_whitespace);

        debug_assert!(
            is_whitespace || !text.chars().any(char::is_whitespace),
            "A token must not mix whitespace and non-whitespace characters: {text:?}"
        );

        Self {
            text,
            is_whitespace,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str { &self.text }

    #[must_use]
    pub fn is_whitespace(&self) -> bool { self.is_whitespace }

    #[must_use]
    pub fn char_count(&self) -> usize { self.text.chars().count() }
}
