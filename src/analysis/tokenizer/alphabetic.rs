//! Alphabetic tokenizer implementation.
//!
//! Splits text into runs of ASCII letters, case-folding as it scans. Digits,
//! punctuation, whitespace, and non-ASCII characters all end the current
//! token. This is the stricter of the two tokenization modes: a candidate
//! like `covid19` yields `covid` and nothing else.
//!
//! # Examples
//!
//! ```
//! use halberd::analysis::tokenizer::Tokenizer;
//! use halberd::analysis::tokenizer::alphabetic::AlphabeticTokenizer;
//!
//! let tokenizer = AlphabeticTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("SARS-CoV diagnosis").unwrap().collect();
//! assert_eq!(tokens[0].text, "sars");
//! assert_eq!(tokens[1].text, "cov");
//! assert_eq!(tokens[2].text, "diagnosis");
//! ```

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that groups contiguous ASCII letters into lowercase tokens.
#[derive(Clone, Debug, Default)]
pub struct AlphabeticTokenizer;

impl AlphabeticTokenizer {
    /// Create a new alphabetic tokenizer.
    pub fn new() -> Self {
        AlphabeticTokenizer
    }
}

impl Tokenizer for AlphabeticTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut word = String::new();

        for c in text.chars() {
            if c.is_ascii_alphabetic() {
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
        "alphabetic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<String> {
        AlphabeticTokenizer::new()
            .tokenize(input)
            .unwrap()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_basic_tokenization() {
        assert_eq!(texts("Hello world"), vec!["hello", "world"]);
    }

    #[test]
    fn test_digits_delimit() {
        // A digit ends the token immediately
        assert_eq!(texts("covid19 h1n1"), vec!["covid", "h", "n"]);
    }

    #[test]
    fn test_punctuation_delimits() {
        assert_eq!(
            texts("spike-protein (receptor)"),
            vec!["spike", "protein", "receptor"]
        );
    }

    #[test]
    fn test_case_folding() {
        assert_eq!(texts("RNA Virus"), vec!["rna", "virus"]);
    }

    #[test]
    fn test_non_ascii_delimits() {
        assert_eq!(texts("naïve"), vec!["na", "ve"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(texts("").is_empty());
        assert!(texts("123 456 !!!").is_empty());
    }

    #[test]
    fn test_trailing_token() {
        assert_eq!(texts("virus"), vec!["virus"]);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(AlphabeticTokenizer::new().name(), "alphabetic");
    }
}
