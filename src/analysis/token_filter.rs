//! Token filter implementations for text analysis.
//!
//! Filters run after tokenization and drop candidate tokens that fail the
//! active validity policy. Unlike classic stop-word filtering, these rules
//! are shape-based: they reject strings that do not look like words at all
//! (OCR debris, gene sequences, run-on fragments) rather than words that are
//! too common.
//!
//! - [`natural_word::NaturalWordFilter`] - length bounds, vowel presence,
//!   and consonant-run limits for the alphabetic policy
//! - [`noise::NoiseFilter`] - length cap, repeated-letter ratio, and the
//!   long-`u` sequence heuristic for the alphanumeric policy

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform or drop tokens in a stream.
pub trait TokenFilter: Send + Sync {
    /// Filter the given token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual filter modules
pub mod natural_word;
pub mod noise;
