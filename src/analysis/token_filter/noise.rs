//! Noise filter implementation.
//!
//! Validity rules for the alphanumeric policy, tuned for the debris that
//! biomedical full text produces. A token survives when it
//!
//! - is at most 20 bytes long,
//! - has no single letter accounting for more than 80% of its bytes,
//! - does not contain the letter `u` while being longer than 5 bytes
//!   (long `u`-bearing strings in this corpus are usually RNA sequences).
//!
//! # Examples
//!
//! ```
//! use halberd::analysis::token::Token;
//! use halberd::analysis::token_filter::TokenFilter;
//! use halberd::analysis::token_filter::noise::NoiseFilter;
//!
//! let filter = NoiseFilter::new();
//! let tokens = vec![Token::new("virus"), Token::new("aaaaaaaa")];
//! let kept: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
//!
//! assert_eq!(kept.len(), 1);
//! assert_eq!(kept[0].text, "virus");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::TokenFilter;
use crate::error::Result;

const MAX_LEN: usize = 20;
const MAX_REPEAT_RATIO: f64 = 0.8;
const MAX_LEN_WITH_U: usize = 5;

/// A filter that drops corpus noise: overlong strings, near-uniform letter
/// runs, and RNA-sequence-like tokens.
#[derive(Clone, Debug, Default)]
pub struct NoiseFilter;

impl NoiseFilter {
    /// Create a new noise filter.
    pub fn new() -> Self {
        NoiseFilter
    }

    /// Check a single token text against the validity rules.
    pub fn is_valid(word: &str) -> bool {
        if word.is_empty() || word.len() > MAX_LEN {
            return false;
        }

        let mut counts = [0usize; 26];
        for &b in word.as_bytes() {
            if b.is_ascii_lowercase() {
                counts[(b - b'a') as usize] += 1;
            }
        }
        let max_count = counts.iter().copied().max().unwrap_or(0);
        if max_count as f64 / word.len() as f64 > MAX_REPEAT_RATIO {
            return false;
        }

        !(word.contains('u') && word.len() > MAX_LEN_WITH_U)
    }
}

impl TokenFilter for NoiseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered: Vec<_> = tokens.filter(|t| Self::is_valid(&t.text)).collect();
        Ok(Box::new(filtered.into_iter()))
    }

    fn name(&self) -> &'static str {
        "noise"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_cap() {
        assert!(NoiseFilter::is_valid("epidemiological")); // 15
        assert!(!NoiseFilter::is_valid("pneumonoultramicroscopic")); // 24
    }

    #[test]
    fn test_repeated_letter_ratio() {
        assert!(!NoiseFilter::is_valid("aaaaaaaaaaaaaaaa"));
        assert!(!NoiseFilter::is_valid("aaaaab")); // 5/6 > 0.8
        assert!(NoiseFilter::is_valid("aaaab")); // 4/5 = 0.8, not above the cutoff
        assert!(NoiseFilter::is_valid("banana")); // 3/6 = 0.5
    }

    #[test]
    fn test_rna_sequence_heuristic() {
        assert!(!NoiseFilter::is_valid("acguacg")); // contains 'u', len > 5
        assert!(NoiseFilter::is_valid("virus")); // contains 'u', len 5
        assert!(NoiseFilter::is_valid("antibody")); // no 'u'
    }

    #[test]
    fn test_digit_tokens() {
        // Letter counts ignore digits, so numeric tokens pass the ratio rule
        assert!(NoiseFilter::is_valid("2020"));
        assert!(NoiseFilter::is_valid("h1n1"));
    }

    #[test]
    fn test_empty_rejected() {
        assert!(!NoiseFilter::is_valid(""));
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(NoiseFilter::new().name(), "noise");
    }
}
