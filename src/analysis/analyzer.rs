//! Analyzer implementations that combine tokenizers and filters.

use std::sync::Arc;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::TokenFilter;
use crate::analysis::token_filter::natural_word::NaturalWordFilter;
use crate::analysis::token_filter::noise::NoiseFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::alphabetic::AlphabeticTokenizer;
use crate::analysis::tokenizer::alphanumeric::AlphanumericTokenizer;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of valid tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &str;

    /// Analyze the given text and collapse the result into a token set.
    ///
    /// This is the entry point the pipeline stages use: membership only,
    /// duplicates discarded.
    fn token_set(&self, text: &str) -> Result<ahash::AHashSet<String>> {
        Ok(self.analyze(text)?.map(|t| t.text).collect())
    }
}

/// A configurable analyzer that combines a tokenizer with a chain of filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn TokenFilter>>,
    name: String,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn TokenFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the filters used by this analyzer.
    pub fn filters(&self) -> &[Arc<dyn TokenFilter>] {
        &self.filters
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut stream = self.tokenizer.tokenize(text)?;
        for filter in &self.filters {
            stream = filter.filter(stream)?;
        }
        Ok(stream)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// The tokenization/validity policy shared by lexicon building and forward
/// indexing.
///
/// The two stages must agree on one policy or forward-index entries would
/// reference tokens the lexicon never contained. Both stages therefore build
/// their analyzer from the same `TokenPolicy` value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenPolicy {
    /// Letters only; vowel/consonant-run word-shape validation.
    #[default]
    Alphabetic,
    /// Letters, digits, and non-ASCII; noise-oriented validation.
    Alphanumeric,
}

impl TokenPolicy {
    /// Build the analyzer pipeline for this policy.
    pub fn analyzer(&self) -> PipelineAnalyzer {
        match self {
            TokenPolicy::Alphabetic => {
                PipelineAnalyzer::new(Arc::new(AlphabeticTokenizer::new()))
                    .add_filter(Arc::new(NaturalWordFilter::new()))
                    .with_name("alphabetic")
            }
            TokenPolicy::Alphanumeric => {
                PipelineAnalyzer::new(Arc::new(AlphanumericTokenizer::new()))
                    .add_filter(Arc::new(NoiseFilter::new()))
                    .with_name("alphanumeric")
            }
        }
    }
}
