//! The four directional word tables and their JSON file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::language::Direction;

/// A single direction's `word -> word` table.
pub type WordTable = BTreeMap<String, String>;

/// Word-level correspondences among Bikol, Filipino and English.
///
/// Keys and values are trimmed lowercase words or short phrases. The tables
/// are built independently, so `bikol_to_filipino` and `filipino_to_bikol`
/// need not be inverses of each other.
///
/// Corresponds to `translation_mappings.json`:
///
/// ```json
/// {
///   "bikol_to_filipino": { "kalintura": "lagnat" },
///   "bikol_to_english":  { "kalintura": "fever" },
///   "filipino_to_bikol": { "lagnat": "kalintura" },
///   "english_to_bikol":  { "fever": "kalintura" }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mappings {
    #[serde(default)]
    pub bikol_to_filipino: WordTable,
    #[serde(default)]
    pub bikol_to_english: WordTable,
    #[serde(default)]
    pub filipino_to_bikol: WordTable,
    #[serde(default)]
    pub english_to_bikol: WordTable,
}

/// Normalizes a table key or query word.
pub fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase()
}

impl Mappings {
    /// Loads mappings from a JSON file.
    ///
    /// A missing file is not an error: all four tables come back empty and
    /// translation degrades to pass-through. A file that exists but cannot be
    /// read or parsed is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read mappings file: {}", path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("Failed to parse mappings file: {}", path.display()))
    }

    /// Parses mappings from JSON text, normalizing every key.
    ///
    /// Duplicate keys resolve to the last occurrence.
    pub fn parse(json: &str) -> Result<Self> {
        let raw: Self = serde_json::from_str(json)?;
        Ok(raw.normalized())
    }

    /// Writes the mappings as pretty JSON, atomically.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create mappings directory: {}", parent.display())
            })?;
        }

        let contents =
            serde_json::to_string_pretty(self).context("Failed to serialize mappings")?;

        crate::fs::atomic_write(path, &contents)
            .with_context(|| format!("Failed to write mappings file: {}", path.display()))
    }

    pub const fn table(&self, direction: Direction) -> &WordTable {
        match direction {
            Direction::BikolToFilipino => &self.bikol_to_filipino,
            Direction::BikolToEnglish => &self.bikol_to_english,
            Direction::FilipinoToBikol => &self.filipino_to_bikol,
            Direction::EnglishToBikol => &self.english_to_bikol,
        }
    }

    const fn table_mut(&mut self, direction: Direction) -> &mut WordTable {
        match direction {
            Direction::BikolToFilipino => &mut self.bikol_to_filipino,
            Direction::BikolToEnglish => &mut self.bikol_to_english,
            Direction::FilipinoToBikol => &mut self.filipino_to_bikol,
            Direction::EnglishToBikol => &mut self.english_to_bikol,
        }
    }

    /// Case-insensitive, trimmed exact lookup.
    pub fn lookup(&self, direction: Direction, word: &str) -> Option<&str> {
        self.table(direction)
            .get(&normalize_word(word))
            .map(String::as_str)
    }

    /// Returns true if `word` is a key of the table for `direction`.
    ///
    /// `word` must already be normalized.
    pub(crate) fn contains(&self, direction: Direction, word: &str) -> bool {
        self.table(direction).contains_key(word)
    }

    /// Inserts an entry with both sides trimmed and lowercased, replacing any previous value.
    pub fn insert(&mut self, direction: Direction, word: &str, translation: &str) {
        self.table_mut(direction)
            .insert(normalize_word(word), normalize_word(translation));
    }

    pub fn len(&self, direction: Direction) -> usize {
        self.table(direction).len()
    }

    /// Returns true if all four tables are empty.
    pub fn is_empty(&self) -> bool {
        Direction::ALL.iter().all(|d| self.table(*d).is_empty())
    }

    fn normalized(self) -> Self {
        let mut out = Self::default();
        for direction in Direction::ALL {
            let table = out.table_mut(direction);
            for (key, value) in self.table(direction) {
                table.insert(normalize_word(key), value.trim().to_string());
            }
        }
        out
    }
}
