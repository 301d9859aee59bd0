//! Structured research-paper document model.
//!
//! Papers arrive as JSON records produced by an external parser. Every field
//! is optional; a record with nothing but a title, or nothing at all, is
//! still a valid document. The model only names the text-bearing surfaces
//! the pipeline scans — anything else in the record is ignored.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::analysis::Analyzer;
use crate::error::Result;

/// A parsed research-paper record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paper {
    /// Title and author metadata.
    #[serde(default)]
    pub metadata: Metadata,
    /// Abstract paragraphs.
    #[serde(default, rename = "abstract")]
    pub abstract_text: Vec<Segment>,
    /// Body paragraphs.
    #[serde(default)]
    pub body_text: Vec<Segment>,
    /// Bibliography entries, keyed by citation marker.
    #[serde(default)]
    pub bib_entries: HashMap<String, BibEntry>,
    /// Figure/table reference entries, keyed by reference marker.
    #[serde(default)]
    pub ref_entries: HashMap<String, RefEntry>,
    /// Back-matter paragraphs (acknowledgements, funding, etc.)
    #[serde(default)]
    pub back_matter: Vec<Segment>,
}

/// Paper metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Paper title.
    #[serde(default)]
    pub title: Option<String>,
    /// Author list.
    #[serde(default)]
    pub authors: Vec<Author>,
}

/// A single author entry.
///
/// Some corpus exports emit authors as bare strings, others as structured
/// records (first/middle/last/affiliation/...). For a structured record every
/// string-valued attribute is scanned for tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Author {
    /// A bare author name.
    Name(String),
    /// A structured author record.
    Record(serde_json::Map<String, Value>),
}

/// A text segment (abstract, body, or back-matter paragraph).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Segment {
    /// Segment text.
    #[serde(default)]
    pub text: Option<String>,
}

/// A bibliography entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BibEntry {
    /// Cited work's title.
    #[serde(default)]
    pub title: Option<String>,
}

/// A figure or table reference entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RefEntry {
    /// Caption text.
    #[serde(default)]
    pub text: Option<String>,
}

impl Paper {
    /// Read a paper record from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Paper> {
        let file = File::open(path.as_ref())?;
        let paper = serde_json::from_reader(BufReader::new(file))?;
        Ok(paper)
    }

    /// Visit every text-bearing field value in the record.
    pub fn visit_text<F: FnMut(&str)>(&self, mut f: F) {
        if let Some(title) = &self.metadata.title {
            f(title);
        }
        for author in &self.metadata.authors {
            match author {
                Author::Name(name) => f(name),
                Author::Record(fields) => {
                    for value in fields.values() {
                        if let Some(s) = value.as_str() {
                            f(s);
                        }
                    }
                }
            }
        }
        for segment in &self.abstract_text {
            if let Some(text) = &segment.text {
                f(text);
            }
        }
        for segment in &self.body_text {
            if let Some(text) = &segment.text {
                f(text);
            }
        }
        for entry in self.bib_entries.values() {
            if let Some(title) = &entry.title {
                f(title);
            }
        }
        for entry in self.ref_entries.values() {
            if let Some(text) = &entry.text {
                f(text);
            }
        }
        for segment in &self.back_matter {
            if let Some(text) = &segment.text {
                f(text);
            }
        }
    }

    /// Extract the set of valid tokens across all text-bearing fields.
    pub fn token_set(&self, analyzer: &dyn Analyzer) -> Result<AHashSet<String>> {
        let mut tokens = AHashSet::new();
        let mut result = Ok(());
        self.visit_text(|text| {
            if result.is_ok() {
                match analyzer.token_set(text) {
                    Ok(set) => tokens.extend(set),
                    Err(e) => result = Err(e),
                }
            }
        });
        result.map(|_| tokens)
    }
}
