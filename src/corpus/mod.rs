//! Corpus of curated Bikol / Filipino / English entries.
//!
//! The corpus is the source the mapping tables are built from. A corpus
//! document is either a plain JSON array of entries or an object with
//! `health_phrases` and `dictionary` arrays:
//!
//! ```json
//! {
//!   "health_phrases": [
//!     { "bikol": "kalintura", "filipino": "lagnat", "english": "fever", "category": "symptoms" }
//!   ],
//!   "dictionary": [
//!     { "bikol": "saen", "filipino": "saan", "english": "where", "pos": "question" }
//!   ]
//! }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::translation::{Direction, Mappings, normalize_word};

/// The curated corpus shipped with the crate.
const SEED_CORPUS: &str = include_str!("../../data/bikol_corpus.json");

/// One curated correspondence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusEntry {
    #[serde(default)]
    pub bikol: String,
    #[serde(default)]
    pub filipino: String,
    #[serde(default)]
    pub english: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Part of speech, for dictionary entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CorpusDocument {
    Entries(Vec<CorpusEntry>),
    Sections {
        #[serde(default)]
        health_phrases: Vec<CorpusEntry>,
        #[serde(default)]
        dictionary: Vec<CorpusEntry>,
    },
}

/// Parses a corpus document. Health phrases come before dictionary entries.
pub fn parse_corpus(json: &str) -> Result<Vec<CorpusEntry>> {
    let document: CorpusDocument = serde_json::from_str(json).context(
        "Corpus must be an array of entries or an object with health_phrases/dictionary",
    )?;

    Ok(match document {
        CorpusDocument::Entries(entries) => entries,
        CorpusDocument::Sections {
            mut health_phrases,
            dictionary,
        } => {
            health_phrases.extend(dictionary);
            health_phrases
        }
    })
}

pub fn load_corpus(path: &Path) -> Result<Vec<CorpusEntry>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read corpus file: {}", path.display()))?;
    parse_corpus(&contents)
        .with_context(|| format!("Failed to parse corpus file: {}", path.display()))
}

/// Returns the curated corpus embedded in the binary.
pub fn seed_corpus() -> Result<Vec<CorpusEntry>> {
    parse_corpus(SEED_CORPUS).context("Embedded corpus is invalid")
}

/// Builds the four mapping tables from corpus entries.
///
/// Entries without a Bikol form are skipped. Each entry feeds the tables
/// for the languages it has; later entries overwrite earlier ones.
pub fn build_mappings(entries: &[CorpusEntry]) -> Mappings {
    let mut mappings = Mappings::default();

    for entry in entries {
        let bikol = normalize_word(&entry.bikol);
        if bikol.is_empty() {
            continue;
        }

        let filipino = normalize_word(&entry.filipino);
        if !filipino.is_empty() {
            mappings.insert(Direction::BikolToFilipino, &bikol, &filipino);
            mappings.insert(Direction::FilipinoToBikol, &filipino, &bikol);
        }

        let english = normalize_word(&entry.english);
        if !english.is_empty() {
            mappings.insert(Direction::BikolToEnglish, &bikol, &english);
            mappings.insert(Direction::EnglishToBikol, &english, &bikol);
        }
    }

    mappings
}

/// Summary of a corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusStats {
    pub entries: usize,
    /// Entry count per category; entries without one count as `general`.
    pub categories: BTreeMap<String, usize>,
}

impl CorpusStats {
    pub fn from_entries(entries: &[CorpusEntry]) -> Self {
        let mut categories = BTreeMap::new();
        for entry in entries {
            let category = entry.category.as_deref().unwrap_or("general");
            *categories.entry(category.to_string()).or_insert(0) += 1;
        }
        Self {
            entries: entries.len(),
            categories,
        }
    }
}
