//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{HalberdArgs, OutputFormat};
use crate::error::Result;

/// Result structure for lexicon building.
#[derive(Debug, Serialize, Deserialize)]
pub struct LexiconBuildResult {
    pub tokens: usize,
    pub files_processed: usize,
    pub files_skipped: usize,
    pub text_artifact: String,
    pub json_artifact: String,
    pub duration_ms: u64,
}

/// Result structure for forward-index building.
#[derive(Debug, Serialize, Deserialize)]
pub struct ForwardIndexBuildResult {
    pub documents_indexed: usize,
    pub documents_skipped: usize,
    pub batches_written: usize,
    pub output_dir: String,
    pub duration_ms: u64,
}

/// Result structure for batch merging.
#[derive(Debug, Serialize, Deserialize)]
pub struct MergeResult {
    pub batches_merged: usize,
    pub documents: usize,
    pub artifact: String,
    pub duration_ms: u64,
}

/// Result structure for PageRank computation.
#[derive(Debug, Serialize, Deserialize)]
pub struct PageRankResult {
    pub nodes: usize,
    pub iterations: usize,
    pub artifact: String,
    pub duration_ms: u64,
}

/// Output a result in the requested format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &HalberdArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &HalberdArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    if let Some(obj) = value.as_object() {
        for (key, val) in obj {
            let label = key.replace('_', " ");
            match val {
                serde_json::Value::String(s) => println!("{label}: {s}"),
                other => println!("{label}: {other}"),
            }
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &HalberdArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}
