//! Token types for text analysis.
//!
//! A [`Token`] is a single candidate word produced by a tokenizer. Tokens
//! carry only their (already case-folded) text: downstream consumers collapse
//! them into sets, so positions and offsets have no meaning here.
//!
//! # Examples
//!
//! ```
//! use halberd::analysis::token::Token;
//!
//! let token = Token::new("virus");
//! assert_eq!(token.text, "virus");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single unit of text after tokenization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The token's text content.
    pub text: String,
}

impl Token {
    /// Create a new token with the given text.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Token { text: text.into() }
    }

    /// Get the token's length in bytes.
    ///
    /// Validity rules are byte-oriented, so this is the length the filters
    /// reason about.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check whether the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A stream of tokens produced by a tokenizer or filter.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello");
        assert_eq!(token.text, "hello");
        assert_eq!(token.len(), 5);
        assert!(!token.is_empty());
    }

    #[test]
    fn test_token_display() {
        let token = Token::new("world");
        assert_eq!(format!("{token}"), "world");
    }
}
