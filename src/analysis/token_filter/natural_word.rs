//! Natural-word filter implementation.
//!
//! Validity rules for the alphabetic policy. A token survives when it
//!
//! - is strictly longer than 3 and strictly shorter than 15 bytes,
//! - contains at least one vowel (`a`, `e`, `i`, `o`, `u`, `y`),
//! - never runs 4 or more consecutive non-vowel characters.
//!
//! Short function words are covered separately by the seed list at
//! lexicon-build time, so the lower length bound loses nothing.
//!
//! # Examples
//!
//! ```
//! use halberd::analysis::token::Token;
//! use halberd::analysis::token_filter::TokenFilter;
//! use halberd::analysis::token_filter::natural_word::NaturalWordFilter;
//!
//! let filter = NaturalWordFilter::new();
//! let tokens = vec![Token::new("virus"), Token::new("xyz")];
//! let kept: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
//!
//! assert_eq!(kept.len(), 1);
//! assert_eq!(kept[0].text, "virus");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::TokenFilter;
use crate::error::Result;

const MIN_LEN_EXCLUSIVE: usize = 3;
const MAX_LEN_EXCLUSIVE: usize = 15;
const MAX_CONSONANT_RUN: usize = 4;

fn is_vowel(c: u8) -> bool {
    matches!(c, b'a' | b'e' | b'i' | b'o' | b'u' | b'y')
}

/// A filter that keeps only tokens shaped like natural-language words.
#[derive(Clone, Debug, Default)]
pub struct NaturalWordFilter;

impl NaturalWordFilter {
    /// Create a new natural-word filter.
    pub fn new() -> Self {
        NaturalWordFilter
    }

    /// Check a single token text against the validity rules.
    pub fn is_valid(word: &str) -> bool {
        if word.len() <= MIN_LEN_EXCLUSIVE || word.len() >= MAX_LEN_EXCLUSIVE {
            return false;
        }

        let mut has_vowel = false;
        let mut consonant_run = 0;
        for &b in word.as_bytes() {
            if is_vowel(b) {
                has_vowel = true;
                consonant_run = 0;
            } else {
                consonant_run += 1;
                if consonant_run >= MAX_CONSONANT_RUN {
                    return false;
                }
            }
        }
        has_vowel
    }
}

impl TokenFilter for NaturalWordFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered: Vec<_> = tokens.filter(|t| Self::is_valid(&t.text)).collect();
        Ok(Box::new(filtered.into_iter()))
    }

    fn name(&self) -> &'static str {
        "natural_word"
    }
}
