//! Command implementations for the Halberd CLI.

use std::time::Instant;

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::forward::builder::{ForwardIndexBuilder, ForwardIndexConfig};
use crate::forward::merge::{BatchMerger, MergeConfig};
use crate::lexicon::Lexicon;
use crate::lexicon::builder::{LexiconBuildConfig, LexiconBuilder};
use crate::pagerank::engine::write_rankings;
use crate::pagerank::{LinkGraph, PageRankConfig, PageRankEngine};

/// Execute a CLI command.
pub fn execute_command(args: HalberdArgs) -> Result<()> {
    match &args.command {
        Command::BuildLexicon(build_args) => build_lexicon(build_args.clone(), &args),
        Command::BuildForwardIndex(build_args) => build_forward_index(build_args.clone(), &args),
        Command::MergeBatches(merge_args) => merge_batches(merge_args.clone(), &args),
        Command::PageRank(rank_args) => page_rank(rank_args.clone(), &args),
    }
}

/// Build a lexicon and persist both artifact formats.
fn build_lexicon(args: BuildLexiconArgs, cli_args: &HalberdArgs) -> Result<()> {
    if cli_args.verbosity() > 0 {
        println!("Building lexicon from: {}", args.corpus_dir.display());
    }
    let start_time = Instant::now();

    let mut config = LexiconBuildConfig::new(&args.corpus_dir);
    config.policy = args.policy;
    config.progress_every = args.progress_every;

    let (lexicon, stats) = LexiconBuilder::new(config).build()?;

    let text_path = args.output.with_extension("txt");
    let json_path = args.output.with_extension("json");
    lexicon.save_text(&text_path)?;
    lexicon.save_json(&json_path)?;

    output_result(
        "Lexicon built successfully",
        &LexiconBuildResult {
            tokens: lexicon.len(),
            files_processed: stats.files_processed,
            files_skipped: stats.files_skipped,
            text_artifact: text_path.to_string_lossy().to_string(),
            json_artifact: json_path.to_string_lossy().to_string(),
            duration_ms: start_time.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}

/// Build batched forward-index files.
fn build_forward_index(args: BuildForwardIndexArgs, cli_args: &HalberdArgs) -> Result<()> {
    if cli_args.verbosity() > 0 {
        println!("Building forward index from: {}", args.corpus_dir.display());
        println!("Using lexicon: {}", args.lexicon.display());
    }
    let start_time = Instant::now();

    let lexicon = Lexicon::load(&args.lexicon)?;
    info!("lexicon loaded: {} tokens", lexicon.len());

    let mut config = ForwardIndexConfig::new(&args.corpus_dir, &args.output_dir);
    config.batch_size = args.batch_size;
    config.policy = args.policy;

    // An empty lexicon is rejected here, before any corpus work
    let stats = ForwardIndexBuilder::new(config, lexicon)?.build()?;

    output_result(
        "Forward index built successfully",
        &ForwardIndexBuildResult {
            documents_indexed: stats.documents_indexed,
            documents_skipped: stats.documents_skipped,
            batches_written: stats.batches_written,
            output_dir: args.output_dir.to_string_lossy().to_string(),
            duration_ms: start_time.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}

/// Merge batch files into one forward-index artifact.
fn merge_batches(args: MergeBatchesArgs, cli_args: &HalberdArgs) -> Result<()> {
    if cli_args.verbosity() > 0 {
        println!("Merging batches from: {}", args.batch_dir.display());
    }
    let start_time = Instant::now();

    let stats = BatchMerger::new(MergeConfig::new(&args.batch_dir, &args.output)).merge()?;

    output_result(
        "Batches merged successfully",
        &MergeResult {
            batches_merged: stats.batches_merged,
            documents: stats.documents,
            artifact: args.output.to_string_lossy().to_string(),
            duration_ms: start_time.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}

/// Compute PageRank scores and write the ranked artifact.
fn page_rank(args: PageRankArgs, cli_args: &HalberdArgs) -> Result<()> {
    if cli_args.verbosity() > 0 {
        println!("Computing PageRank over: {}", args.edges.display());
    }
    let start_time = Instant::now();

    let graph = LinkGraph::load(&args.edges, args.nodes)?;
    let engine = PageRankEngine::new(PageRankConfig {
        damping: args.damping,
        tolerance: args.tolerance,
    });
    let (scores, iterations) = engine.compute(&graph);
    write_rankings(&engine.ranked(&scores), &args.output)?;

    output_result(
        "PageRank computed successfully",
        &PageRankResult {
            nodes: graph.node_count(),
            iterations,
            artifact: args.output.to_string_lossy().to_string(),
            duration_ms: start_time.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}
