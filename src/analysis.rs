//! Text analysis pipeline: tokenizers, validity filters, and analyzers.
//!
//! Analysis turns a raw text field into the set of tokens that may enter the
//! lexicon. A [`tokenizer::Tokenizer`] splits the field into candidate
//! tokens, a chain of [`token_filter::TokenFilter`]s drops the candidates
//! that fail the active validity policy, and an
//! [`analyzer::Analyzer`] ties the two together.
//!
//! Both pipeline stages that tokenize text (lexicon building and forward
//! indexing) must run the same analyzer, otherwise the forward index will
//! reference tokens the lexicon was never built from. [`TokenPolicy`] is the
//! single knob that selects the pipeline for both.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::{Analyzer, PipelineAnalyzer, TokenPolicy};
