//! External merge of forward-index batch files.
//!
//! Batches are processed in ascending batch-sequence order (parsed from the
//! filename, never filesystem enumeration order), so merging the same set of
//! batches always yields byte-identical output. Entries land in a map keyed
//! by integer document id; on duplicate doc ids the later batch wins. The
//! merged artifact is a single JSON object whose keys iterate in ascending
//! numeric order.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::forward::builder::BATCH_FILE_PREFIX;

/// Configuration for a batch merge.
#[derive(Debug, Clone)]
pub struct MergeConfig {
    /// Directory containing `forward_index_batch_<n>.json` files.
    pub batch_dir: PathBuf,
    /// Path of the merged artifact.
    pub output_path: PathBuf,
}

impl MergeConfig {
    /// Create a merge config.
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(batch_dir: P, output_path: Q) -> Self {
        MergeConfig {
            batch_dir: batch_dir.into(),
            output_path: output_path.into(),
        }
    }
}

/// Counters from a batch merge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MergeStats {
    /// Batch files merged.
    pub batches_merged: usize,
    /// Distinct documents in the merged artifact.
    pub documents: usize,
}

/// Merges batch files into one canonically ordered forward index.
pub struct BatchMerger {
    config: MergeConfig,
}

impl BatchMerger {
    /// Create a new merger.
    pub fn new(config: MergeConfig) -> Self {
        BatchMerger { config }
    }

    /// Merge all batch files and write the combined artifact.
    pub fn merge(&self) -> Result<MergeStats> {
        let batches = batch_files(&self.config.batch_dir)?;
        info!("merging {} batch files", batches.len());

        let mut merged: BTreeMap<u64, Vec<u32>> = BTreeMap::new();
        let mut stats = MergeStats::default();

        for (seq, path) in &batches {
            let file = File::open(path)?;
            let batch: BTreeMap<String, Vec<u32>> =
                serde_json::from_reader(BufReader::new(file))?;

            for (doc_id, word_ids) in batch {
                match doc_id.parse::<u64>() {
                    Ok(id) => {
                        merged.insert(id, word_ids);
                    }
                    Err(_) => {
                        warn!("batch {seq}: non-numeric doc id {doc_id:?}, dropped");
                    }
                }
            }
            stats.batches_merged += 1;
        }

        stats.documents = merged.len();
        self.write_merged(&merged)?;
        info!(
            "merged {} documents from {} batches into {}",
            stats.documents,
            stats.batches_merged,
            self.config.output_path.display()
        );
        Ok(stats)
    }

    fn write_merged(&self, merged: &BTreeMap<u64, Vec<u32>>) -> Result<()> {
        // serde_json is built with preserve_order, so inserting in BTreeMap
        // order keeps the keys numerically ascending in the artifact.
        let mut object = serde_json::Map::new();
        for (doc_id, word_ids) in merged {
            object.insert(doc_id.to_string(), serde_json::Value::from(word_ids.clone()));
        }

        let file = File::create(&self.config.output_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &object)?;
        writer.flush()?;
        Ok(())
    }
}

/// Enumerate batch files in a directory, ordered by batch sequence number.
fn batch_files<P: AsRef<Path>>(dir: P) -> Result<Vec<(usize, PathBuf)>> {
    let mut batches = Vec::new();
    for entry in std::fs::read_dir(dir.as_ref())? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let Some(seq) = stem.strip_prefix(BATCH_FILE_PREFIX) else {
            continue;
        };
        match seq.parse::<usize>() {
            Ok(seq) => batches.push((seq, path)),
            Err(_) => warn!("ignoring oddly named batch file {}", path.display()),
        }
    }
    batches.sort_by_key(|&(seq, _)| seq);
    Ok(batches)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_batch(dir: &Path, seq: usize, entries: &[(&str, &[u32])]) {
        let map: BTreeMap<String, Vec<u32>> = entries
            .iter()
            .map(|&(id, ids)| (id.to_string(), ids.to_vec()))
            .collect();
        let path = dir.join(format!("{BATCH_FILE_PREFIX}{seq}.json"));
        std::fs::write(path, serde_json::to_string(&map).unwrap()).unwrap();
    }

    fn merged_keys(path: &Path) -> Vec<String> {
        let object: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        object.keys().cloned().collect()
    }

    #[test]
    fn test_keys_ascend_numerically() {
        let dir = tempfile::tempdir().unwrap();
        write_batch(dir.path(), 1, &[("10", &[1]), ("2", &[2]), ("31", &[3])]);
        write_batch(dir.path(), 2, &[("9", &[4]), ("100", &[5])]);

        let out = dir.path().join("merged.json");
        let stats = BatchMerger::new(MergeConfig::new(dir.path(), &out))
            .merge()
            .unwrap();

        assert_eq!(stats.batches_merged, 2);
        assert_eq!(stats.documents, 5);
        // Numeric order, not string order ("10" would sort before "2")
        assert_eq!(merged_keys(&out), vec!["2", "9", "10", "31", "100"]);
    }

    #[test]
    fn test_later_batch_wins_on_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        write_batch(dir.path(), 1, &[("7", &[1, 2])]);
        write_batch(dir.path(), 2, &[("7", &[3, 4])]);

        let out = dir.path().join("merged.json");
        BatchMerger::new(MergeConfig::new(dir.path(), &out))
            .merge()
            .unwrap();

        let object: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(object["7"], serde_json::json!([3, 4]));
    }

    #[test]
    fn test_merge_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        write_batch(dir.path(), 1, &[("3", &[1]), ("1", &[2])]);
        write_batch(dir.path(), 2, &[("2", &[3])]);

        let out_a = dir.path().join("a.json");
        let out_b = dir.path().join("b.json");
        BatchMerger::new(MergeConfig::new(dir.path(), &out_a))
            .merge()
            .unwrap();
        BatchMerger::new(MergeConfig::new(dir.path(), &out_b))
            .merge()
            .unwrap();

        assert_eq!(
            std::fs::read(&out_a).unwrap(),
            std::fs::read(&out_b).unwrap()
        );
    }

    #[test]
    fn test_non_numeric_doc_ids_dropped() {
        let dir = tempfile::tempdir().unwrap();
        write_batch(dir.path(), 1, &[("5", &[1]), ("PMC123", &[2])]);

        let out = dir.path().join("merged.json");
        let stats = BatchMerger::new(MergeConfig::new(dir.path(), &out))
            .merge()
            .unwrap();

        assert_eq!(stats.documents, 1);
        assert_eq!(merged_keys(&out), vec!["5"]);
    }
}
