//! Lexicon builder: corpus scan and id assignment.
//!
//! Scans every `.json` document in a directory, unions the valid token sets
//! with the seed list, and assigns ids by lexicographic rank. Per-file
//! scanning runs on the rayon pool; since id assignment depends only on the
//! final token set, completion order cannot affect the result.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use ahash::AHashSet;
use log::{info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::{Analyzer, TokenPolicy};
use crate::document::Paper;
use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::lexicon::seed::SEED_WORDS;

/// Configuration for a lexicon build.
#[derive(Debug, Clone)]
pub struct LexiconBuildConfig {
    /// Directory of `.json` paper records.
    pub corpus_dir: PathBuf,
    /// Tokenization/validity policy (must match the forward-index build).
    pub policy: TokenPolicy,
    /// Log progress every this many files.
    pub progress_every: usize,
}

impl LexiconBuildConfig {
    /// Create a config for the given corpus directory with default settings.
    pub fn new<P: Into<PathBuf>>(corpus_dir: P) -> Self {
        LexiconBuildConfig {
            corpus_dir: corpus_dir.into(),
            policy: TokenPolicy::default(),
            progress_every: 50,
        }
    }
}

/// Counters from a corpus scan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanStats {
    /// Files whose token sets entered the build.
    pub files_processed: usize,
    /// Files skipped due to read or parse failures.
    pub files_skipped: usize,
}

/// Builds a [`Lexicon`] from a corpus directory.
pub struct LexiconBuilder {
    config: LexiconBuildConfig,
}

impl LexiconBuilder {
    /// Create a new builder with the given configuration.
    pub fn new(config: LexiconBuildConfig) -> Self {
        LexiconBuilder { config }
    }

    /// Scan the corpus and build the lexicon.
    ///
    /// An unenumerable corpus directory is not fatal: the build completes
    /// with the seed vocabulary alone, and dependent stages decide whether
    /// that is acceptable.
    pub fn build(&self) -> Result<(Lexicon, ScanStats)> {
        let files = match corpus_files(&self.config.corpus_dir) {
            Ok(files) => files,
            Err(e) => {
                warn!(
                    "cannot enumerate corpus directory {}: {e}",
                    self.config.corpus_dir.display()
                );
                Vec::new()
            }
        };
        info!("scanning {} corpus files", files.len());

        let analyzer = self.config.policy.analyzer();
        let progress_every = self.config.progress_every.max(1);
        let scanned = AtomicUsize::new(0);

        let token_sets: Vec<Option<AHashSet<String>>> = files
            .par_iter()
            .map(|path| {
                let result = scan_file(path, &analyzer);
                let done = scanned.fetch_add(1, Ordering::Relaxed) + 1;
                if done % progress_every == 0 {
                    info!("{done} files processed");
                }
                match result {
                    Ok(tokens) => Some(tokens),
                    Err(e) => {
                        warn!("skipping {}: {e}", path.display());
                        None
                    }
                }
            })
            .collect();

        let mut stats = ScanStats::default();
        let mut all_tokens = AHashSet::new();
        for set in token_sets {
            match set {
                Some(tokens) => {
                    stats.files_processed += 1;
                    all_tokens.extend(tokens);
                }
                None => stats.files_skipped += 1,
            }
        }
        all_tokens.extend(SEED_WORDS.iter().map(|w| w.to_string()));

        let lexicon = Lexicon::from_tokens(all_tokens);
        info!(
            "lexicon built: {} tokens from {} files ({} skipped)",
            lexicon.len(),
            stats.files_processed,
            stats.files_skipped
        );
        Ok((lexicon, stats))
    }
}

/// Enumerate the `.json` files of a corpus directory in sorted order.
///
/// Sorted order keeps batch boundaries and progress output deterministic
/// regardless of filesystem enumeration order.
pub fn corpus_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir.as_ref())? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn scan_file(path: &Path, analyzer: &dyn Analyzer) -> Result<AHashSet<String>> {
    Paper::from_file(path)?.token_set(analyzer)
}
