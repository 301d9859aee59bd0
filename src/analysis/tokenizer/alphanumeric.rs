//! Alphanumeric tokenizer implementation.
//!
//! Splits text into runs of ASCII letters, ASCII digits, and non-ASCII
//! characters, case-folding ASCII letters as it scans. Only ASCII
//! punctuation and whitespace delimit, so accented words and identifiers
//! like `h1n1` survive as single tokens.
//!
//! # Examples
//!
//! ```
//! use halberd::analysis::tokenizer::Tokenizer;
//! use halberd::analysis::tokenizer::alphanumeric::AlphanumericTokenizer;
//!
//! let tokenizer = AlphanumericTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("H1N1 outbreak").unwrap().collect();
//! assert_eq!(tokens[0].text, "h1n1");
//! assert_eq!(tokens[1].text, "outbreak");
//! ```

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that groups letters, digits, and non-ASCII characters into
/// lowercase tokens.
#[derive(Clone, Debug, Default)]
pub struct AlphanumericTokenizer;

impl AlphanumericTokenizer {
    /// Create a new alphanumeric tokenizer.
    pub fn new() -> Self {
        AlphanumericTokenizer
    }
}

impl Tokenizer for AlphanumericTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut word = String::new();

        for c in text.chars() {
            if c.is_ascii_alphanumeric() || !c.is_ascii() {
                word.push(c.to_ascii_lowercase());
            } else if !word.is_empty() {
                tokens.push(Token::new(std::mem::take(&mut word)));
            }
        }
        if !word.is_empty() {
            tokens.push(Token::new(word));
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "alphanumeric"
    }
}
