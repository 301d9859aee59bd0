//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step in the analysis pipeline, responsible for
//! splitting a raw field value into lowercase candidate tokens. The two
//! implementations correspond to the two character classes the corpus
//! scanners treat as word-continuation:
//!
//! - [`alphabetic::AlphabeticTokenizer`] - only ASCII letters extend a token;
//!   digits and everything else delimit
//! - [`alphanumeric::AlphanumericTokenizer`] - ASCII letters, ASCII digits,
//!   and non-ASCII characters extend a token
//!
//! # Examples
//!
//! ```
//! use halberd::analysis::tokenizer::Tokenizer;
//! use halberd::analysis::tokenizer::alphabetic::AlphabeticTokenizer;
//!
//! let tokenizer = AlphabeticTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so analyzers can be shared across the
/// rayon worker pool during corpus scans.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of lowercase tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod alphabetic;
pub mod alphanumeric;
