//! Command line argument parsing for the Halberd CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::analysis::TokenPolicy;

/// Halberd - offline lexicon, forward-index, and PageRank builder
#[derive(Parser, Debug, Clone)]
#[command(name = "halberd")]
#[command(about = "Offline lexicon, forward-index, and PageRank builder for research-paper corpora")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct HalberdArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl HalberdArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build a lexicon from a corpus directory
    #[command(name = "build-lexicon")]
    BuildLexicon(BuildLexiconArgs),

    /// Build batched forward-index files from a corpus and a lexicon
    #[command(name = "build-forward-index")]
    BuildForwardIndex(BuildForwardIndexArgs),

    /// Merge forward-index batch files into one artifact
    #[command(name = "merge-batches")]
    MergeBatches(MergeBatchesArgs),

    /// Compute PageRank scores over a link graph
    #[command(name = "page-rank")]
    PageRank(PageRankArgs),
}

/// Arguments for building a lexicon
#[derive(Parser, Debug, Clone)]
pub struct BuildLexiconArgs {
    /// Directory of .json paper records
    #[arg(value_name = "CORPUS_DIR")]
    pub corpus_dir: PathBuf,

    /// Output path base; writes <OUT>.txt and <OUT>.json
    #[arg(short, long, value_name = "OUT_BASE")]
    pub output: PathBuf,

    /// Tokenization/validity policy
    #[arg(long, value_enum, default_value_t = TokenPolicy::Alphabetic)]
    pub policy: TokenPolicy,

    /// Log progress every N files
    #[arg(long, default_value_t = 50)]
    pub progress_every: usize,
}

/// Arguments for building a forward index
#[derive(Parser, Debug, Clone)]
pub struct BuildForwardIndexArgs {
    /// Directory of .json paper records
    #[arg(value_name = "CORPUS_DIR")]
    pub corpus_dir: PathBuf,

    /// Lexicon artifact to resolve tokens against (.json or text)
    #[arg(short, long, value_name = "LEXICON")]
    pub lexicon: PathBuf,

    /// Directory receiving batch files
    #[arg(short, long, value_name = "OUT_DIR")]
    pub output_dir: PathBuf,

    /// Maximum number of documents per batch
    #[arg(long, default_value_t = 3000)]
    pub batch_size: usize,

    /// Tokenization/validity policy (must match the lexicon build)
    #[arg(long, value_enum, default_value_t = TokenPolicy::Alphabetic)]
    pub policy: TokenPolicy,
}

/// Arguments for merging batches
#[derive(Parser, Debug, Clone)]
pub struct MergeBatchesArgs {
    /// Directory containing forward_index_batch_<n>.json files
    #[arg(value_name = "BATCH_DIR")]
    pub batch_dir: PathBuf,

    /// Path of the merged artifact
    #[arg(short, long, value_name = "OUT_FILE")]
    pub output: PathBuf,
}

/// Arguments for PageRank computation
#[derive(Parser, Debug, Clone)]
pub struct PageRankArgs {
    /// Edge file: one header line, then <from>,<to> per line
    #[arg(value_name = "EDGES_FILE")]
    pub edges: PathBuf,

    /// Path of the ranked-score artifact
    #[arg(short, long, value_name = "OUT_FILE")]
    pub output: PathBuf,

    /// Number of nodes in the graph (upper bound for node ids)
    #[arg(short, long, value_name = "N")]
    pub nodes: usize,

    /// Damping factor
    #[arg(long, default_value_t = 0.85)]
    pub damping: f64,

    /// Convergence tolerance (L1)
    #[arg(long, default_value_t = 1e-8)]
    pub tolerance: f64,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
