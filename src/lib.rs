//! # Halberd
//!
//! Offline artifact builder for ranking and indexing a corpus of structured
//! research-paper documents.
//!
//! ## Pipeline stages
//!
//! - Lexicon building: scan the corpus, normalize text into tokens, and
//!   assign every surviving token a dense integer id
//! - Forward indexing: resolve each document's token set against the lexicon
//!   and emit `document -> [word ids]` records in bounded-memory batches
//! - Batch merging: external merge of batch files into one forward index
//!   ordered by numeric document id
//! - PageRank: power iteration over a directed link graph with damping and
//!   dangling-mass redistribution
//!
//! The stages are batch, file-to-file, and share no runtime state; index
//! building and ranking communicate only through their output artifacts.

pub mod analysis;
pub mod cli;
pub mod document;
pub mod error;
pub mod forward;
pub mod lexicon;
pub mod pagerank;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
