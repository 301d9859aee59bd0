//! Forward index: per-document bags of word ids.
//!
//! The builder resolves each document's token set against a loaded lexicon
//! and accumulates `docId -> [word ids]` entries, flushing to numbered batch
//! files to cap memory. The merger then folds all batch files into one
//! artifact ordered by numeric document id.

pub mod builder;
pub mod merge;
