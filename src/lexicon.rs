//! Lexicon: the controlled vocabulary mapping tokens to dense integer ids.
//!
//! Ids are the token's rank in lexicographic order of the final deduplicated
//! token set, so a lexicon is reproducible from its token set alone — two
//! runs over the same corpus assign identical ids no matter what order files
//! were scanned in. Once persisted, a lexicon is closed: later stages only
//! read it.
//!
//! Two artifact formats exist, matching the rest of the pipeline:
//!
//! - text: one `<id> <token>` line per token, ascending id
//! - JSON: a single `token -> id` object
//!
//! # Examples
//!
//! ```
//! use halberd::lexicon::Lexicon;
//!
//! let lexicon = Lexicon::from_tokens(["virus", "rapid", "spread"].map(String::from));
//! assert_eq!(lexicon.get("rapid"), Some(0));
//! assert_eq!(lexicon.get("spread"), Some(1));
//! assert_eq!(lexicon.get("virus"), Some(2));
//! assert_eq!(lexicon.get("unknown"), None);
//! ```

pub mod builder;
pub mod seed;

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use ahash::AHashMap;

use crate::error::{HalberdError, Result};

/// An immutable token -> id mapping.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    map: AHashMap<String, u32>,
}

impl Lexicon {
    /// Build a lexicon from a token set, assigning ids by lexicographic rank.
    ///
    /// Duplicates collapse; the resulting ids are dense over `[0, len)`.
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let sorted: BTreeSet<String> = tokens.into_iter().collect();
        let map = sorted
            .into_iter()
            .enumerate()
            .map(|(id, token)| (token, id as u32))
            .collect();
        Lexicon { map }
    }

    /// Build a lexicon from explicit `(token, id)` pairs.
    ///
    /// Used by the loaders; ids are taken as-is and need not be dense.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, u32)>,
    {
        Lexicon {
            map: pairs.into_iter().collect(),
        }
    }

    /// Look up the id for a token.
    pub fn get(&self, token: &str) -> Option<u32> {
        self.map.get(token).copied()
    }

    /// Check whether a token is present.
    pub fn contains(&self, token: &str) -> bool {
        self.map.contains_key(token)
    }

    /// Number of tokens in the lexicon.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check whether the lexicon is empty.
    ///
    /// An empty lexicon is fatal for every dependent stage.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over `(token, id)` entries in ascending id order.
    pub fn iter_by_id(&self) -> impl Iterator<Item = (&str, u32)> {
        let mut entries: Vec<(&str, u32)> =
            self.map.iter().map(|(t, &id)| (t.as_str(), id)).collect();
        entries.sort_by_key(|&(_, id)| id);
        entries.into_iter()
    }

    /// Merge two lexicons by unioning their token sets and re-ranking.
    ///
    /// Ids from the inputs are discarded; the merged lexicon assigns fresh
    /// dense ids by lexicographic rank, the same way a single build would.
    pub fn merge(&self, other: &Lexicon) -> Lexicon {
        Lexicon::from_tokens(
            self.map
                .keys()
                .chain(other.map.keys())
                .cloned()
                .collect::<Vec<_>>(),
        )
    }

    /// Write the lexicon as a text artifact: one `<id> <token>` line per
    /// token, ascending id.
    pub fn save_text<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        for (token, id) in self.iter_by_id() {
            writeln!(writer, "{id} {token}")?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Write the lexicon as a JSON `token -> id` object, in ascending id
    /// order.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut object = serde_json::Map::new();
        for (token, id) in self.iter_by_id() {
            object.insert(token.to_string(), serde_json::Value::from(id));
        }
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &object)?;
        writer.flush()?;
        Ok(())
    }

    /// Load a lexicon artifact, dispatching on the file extension
    /// (`.json` -> JSON object, anything else -> text lines).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Lexicon> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::load_json(path),
            _ => Self::load_text(path),
        }
    }

    /// Load a text artifact (`<id> <token>` lines).
    pub fn load_text<P: AsRef<Path>>(path: P) -> Result<Lexicon> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut map = AHashMap::new();
        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            if line.is_empty() {
                continue;
            }
            let (id, token) = line.split_once(' ').ok_or_else(|| {
                HalberdError::lexicon(format!(
                    "malformed line {} in {}",
                    line_no + 1,
                    path.display()
                ))
            })?;
            let id: u32 = id.parse().map_err(|_| {
                HalberdError::lexicon(format!(
                    "invalid id on line {} in {}",
                    line_no + 1,
                    path.display()
                ))
            })?;
            map.insert(token.to_string(), id);
        }
        Ok(Lexicon { map })
    }

    /// Load a JSON artifact (`token -> id` object).
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Lexicon> {
        let file = File::open(path.as_ref())?;
        let object: serde_json::Map<String, serde_json::Value> =
            serde_json::from_reader(BufReader::new(file))?;

        let mut map = AHashMap::with_capacity(object.len());
        for (token, value) in object {
            let id = value
                .as_u64()
                .and_then(|id| u32::try_from(id).ok())
                .ok_or_else(|| {
                    HalberdError::lexicon(format!("invalid id for token {token:?}"))
                })?;
            map.insert(token, id);
        }
        Ok(Lexicon { map })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sorted_rank() {
        let lexicon =
            Lexicon::from_tokens(["zebra", "apple", "mango", "apple"].map(String::from));
        assert_eq!(lexicon.len(), 3);
        assert_eq!(lexicon.get("apple"), Some(0));
        assert_eq!(lexicon.get("mango"), Some(1));
        assert_eq!(lexicon.get("zebra"), Some(2));
    }

    #[test]
    fn test_ids_dense_and_unique() {
        let tokens = ["delta", "alpha", "gamma", "beta", "epsilon"];
        let lexicon = Lexicon::from_tokens(tokens.map(String::from));

        let mut ids: Vec<u32> = tokens.iter().filter_map(|t| lexicon.get(t)).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_reproducible_from_token_set() {
        let a = Lexicon::from_tokens(["x", "y", "z"].map(String::from));
        let b = Lexicon::from_tokens(["z", "x", "y"].map(String::from));
        for token in ["x", "y", "z"] {
            assert_eq!(a.get(token), b.get(token));
        }
    }

    #[test]
    fn test_merge_reranks() {
        let a = Lexicon::from_tokens(["apple", "mango"].map(String::from));
        let b = Lexicon::from_tokens(["banana", "mango"].map(String::from));
        let merged = a.merge(&b);

        assert_eq!(merged.len(), 3);
        assert_eq!(merged.get("apple"), Some(0));
        assert_eq!(merged.get("banana"), Some(1));
        assert_eq!(merged.get("mango"), Some(2));
    }

    #[test]
    fn test_text_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.txt");

        let lexicon = Lexicon::from_tokens(["virus", "rapid", "spread"].map(String::from));
        lexicon.save_text(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "0 rapid\n1 spread\n2 virus\n");

        let loaded = Lexicon::load(&path).unwrap();
        assert_eq!(loaded.get("spread"), Some(1));
        assert_eq!(loaded.len(), 3);
    }

    #[test]
    fn test_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.json");

        let lexicon = Lexicon::from_tokens(["virus", "rapid"].map(String::from));
        lexicon.save_json(&path).unwrap();

        let loaded = Lexicon::load(&path).unwrap();
        assert_eq!(loaded.get("rapid"), Some(0));
        assert_eq!(loaded.get("virus"), Some(1));
    }

    #[test]
    fn test_load_rejects_malformed_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.txt");
        std::fs::write(&path, "0 rapid\nnot-a-line\n").unwrap();

        assert!(Lexicon::load(&path).is_err());
    }

    #[test]
    fn test_empty_lexicon() {
        let lexicon = Lexicon::from_tokens(Vec::<String>::new());
        assert!(lexicon.is_empty());
        assert_eq!(lexicon.get("anything"), None);
    }
}
