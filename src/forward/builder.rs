//! Forward-index builder with bounded-memory batch flushing.
//!
//! Documents are processed in sorted filename order, in chunks of
//! `batch_size`. Each chunk's entries are tokenized in parallel, collected
//! into an ordered table, and flushed to `forward_index_batch_<n>.json`
//! before the next chunk begins, so at most one batch of entries is ever
//! held in memory. Batch numbers start at 1 and are contiguous.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{error, info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::{Analyzer, TokenPolicy};
use crate::document::Paper;
use crate::error::{HalberdError, Result};
use crate::lexicon::Lexicon;
use crate::lexicon::builder::corpus_files;

/// Filename prefix shared by the builder and the merger.
pub const BATCH_FILE_PREFIX: &str = "forward_index_batch_";

/// Configuration for a forward-index build.
#[derive(Debug, Clone)]
pub struct ForwardIndexConfig {
    /// Directory of `.json` paper records.
    pub corpus_dir: PathBuf,
    /// Directory receiving batch files.
    pub output_dir: PathBuf,
    /// Maximum number of documents per batch.
    pub batch_size: usize,
    /// Tokenization/validity policy (must match the lexicon build).
    pub policy: TokenPolicy,
}

impl ForwardIndexConfig {
    /// Create a config with the default batch size.
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(corpus_dir: P, output_dir: Q) -> Self {
        ForwardIndexConfig {
            corpus_dir: corpus_dir.into(),
            output_dir: output_dir.into(),
            batch_size: 3000,
            policy: TokenPolicy::default(),
        }
    }
}

/// Counters from a forward-index build.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForwardIndexStats {
    /// Documents that produced an index entry.
    pub documents_indexed: usize,
    /// Documents skipped due to read or parse failures.
    pub documents_skipped: usize,
    /// Batch files written.
    pub batches_written: usize,
}

/// Builds batched forward-index files from a corpus and a lexicon.
pub struct ForwardIndexBuilder {
    config: ForwardIndexConfig,
    lexicon: Lexicon,
}

impl ForwardIndexBuilder {
    /// Create a new builder.
    ///
    /// Fails immediately on an empty lexicon: every document would resolve
    /// to an empty entry, which is never intended.
    pub fn new(config: ForwardIndexConfig, lexicon: Lexicon) -> Result<Self> {
        if lexicon.is_empty() {
            return Err(HalberdError::lexicon(
                "refusing to build a forward index from an empty lexicon",
            ));
        }
        Ok(ForwardIndexBuilder { config, lexicon })
    }

    /// Process the corpus and write all batch files.
    pub fn build(&self) -> Result<ForwardIndexStats> {
        let files = corpus_files(&self.config.corpus_dir)?;
        info!("indexing {} corpus files", files.len());
        std::fs::create_dir_all(&self.config.output_dir)?;

        let analyzer = self.config.policy.analyzer();
        let batch_size = self.config.batch_size.max(1);
        let mut stats = ForwardIndexStats::default();
        let mut batch_num = 0;

        for chunk in files.chunks(batch_size) {
            let entries: Vec<Option<(String, Vec<u32>)>> = chunk
                .par_iter()
                .map(|path| match self.index_document(path, &analyzer) {
                    Ok(entry) => Some(entry),
                    Err(e) => {
                        warn!("skipping {}: {e}", path.display());
                        None
                    }
                })
                .collect();

            let mut batch: BTreeMap<String, Vec<u32>> = BTreeMap::new();
            for entry in entries {
                match entry {
                    Some((doc_id, word_ids)) => {
                        stats.documents_indexed += 1;
                        batch.insert(doc_id, word_ids);
                    }
                    None => stats.documents_skipped += 1,
                }
            }

            if batch.is_empty() {
                continue;
            }
            batch_num += 1;
            let path = batch_path(&self.config.output_dir, batch_num);
            // A lost batch is logged but does not end the run; the merge
            // stage sees whatever batches made it to disk.
            match write_batch(&batch, &path) {
                Ok(()) => {
                    stats.batches_written += 1;
                    info!(
                        "saved batch {batch_num} ({} documents so far)",
                        stats.documents_indexed
                    );
                }
                Err(e) => error!("cannot write batch {}: {e}", path.display()),
            }
        }

        info!(
            "forward index built: {} documents in {} batches ({} skipped)",
            stats.documents_indexed, stats.batches_written, stats.documents_skipped
        );
        Ok(stats)
    }

    fn index_document(&self, path: &Path, analyzer: &dyn Analyzer) -> Result<(String, Vec<u32>)> {
        let doc_id = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| HalberdError::index(format!("bad filename: {}", path.display())))?
            .to_string();

        let tokens = Paper::from_file(path)?.token_set(analyzer)?;
        let mut word_ids: Vec<u32> = tokens
            .iter()
            .filter_map(|token| self.lexicon.get(token))
            .collect();
        // Unknown tokens are silently dropped; ids are sorted so the same
        // document always serializes identically.
        word_ids.sort_unstable();
        Ok((doc_id, word_ids))
    }
}

/// Path of the batch file with the given sequence number.
pub fn batch_path(output_dir: &Path, batch_num: usize) -> PathBuf {
    output_dir.join(format!("{BATCH_FILE_PREFIX}{batch_num}.json"))
}

fn write_batch(batch: &BTreeMap<String, Vec<u32>>, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, batch)?;
    writer.flush()?;
    Ok(())
}
