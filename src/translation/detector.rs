//! Marker-word language detection.
//!
//! Each language gets a score from the distinct word tokens of the input:
//! two points per marker word, plus one point per token found as a key of
//! the language's outbound mapping table. English only counts function
//! words.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

use super::language::{Direction, Language};
use super::mappings::Mappings;

/// Common Bikol function and question words.
pub const BIKOL_MARKERS: &[&str] = &[
    "saen", "haen", "tabi", "maray", "aldaw", "dai", "iyo", "ano", "siisay", "nuarin", "pano",
    "tano", "pira", "siya", "sinda", "kamo", "kami", "kita", "ini", "idto", "kaipuhan", "igwa",
    "yaon", "mayo", "bago", "pagkatapos", "asin", "pero", "kun", "ta", "ngonyan", "duman",
    "digdi", "mabalos", "kumusta",
];

/// Common Filipino function and question words.
pub const FILIPINO_MARKERS: &[&str] = &[
    "saan", "nasaan", "mabuti", "araw", "hindi", "oo", "sino", "kailan", "paano", "bakit",
    "ilan", "sila", "kayo", "tayo", "ito", "iyon", "kailangan", "mayroon", "wala", "bago",
    "pagkatapos", "at", "pero", "kung", "ngayon", "doon", "dito", "salamat", "kamusta", "gusto",
    "pwede", "dapat", "po",
];

/// English articles, auxiliaries, wh-words and politeness words.
pub const ENGLISH_MARKERS: &[&str] = &[
    "the", "is", "are", "what", "where", "when", "how", "why", "can", "do", "does", "have", "has",
    "need", "want", "please",
];

// unwrap is safe: the pattern is a compile-time constant
#[allow(clippy::unwrap_used)]
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

/// Per-language scores for one piece of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LanguageScores {
    pub bikol: usize,
    pub filipino: usize,
    pub english: usize,
}

impl LanguageScores {
    /// Applies the decision table.
    ///
    /// A Bikol/Filipino tie above zero is `Unknown`.
    pub fn verdict(self) -> Language {
        if self.english > self.bikol.max(self.filipino) {
            Language::English
        } else if self.bikol > self.filipino && self.bikol > 0 {
            Language::Bikol
        } else if self.filipino > self.bikol && self.filipino > 0 {
            Language::Filipino
        } else {
            Language::Unknown
        }
    }
}

/// Distinct lowercase word tokens of `text`; punctuation is discarded.
pub fn tokenize(text: &str) -> HashSet<String> {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Scores `text` against the marker sets and the mapping tables.
pub fn scores(text: &str, mappings: &Mappings) -> LanguageScores {
    let tokens = tokenize(text);
    let markers = |set: &[&str]| tokens.iter().filter(|t| set.contains(&t.as_str())).count();
    let dictionary_hits = |direction: Direction| {
        tokens
            .iter()
            .filter(|t| mappings.contains(direction, t))
            .count()
    };

    LanguageScores {
        bikol: 2 * markers(BIKOL_MARKERS) + dictionary_hits(Direction::BikolToFilipino),
        filipino: 2 * markers(FILIPINO_MARKERS) + dictionary_hits(Direction::FilipinoToBikol),
        english: markers(ENGLISH_MARKERS),
    }
}

/// Guesses the language of `text`.
///
/// Empty or whitespace-only text is `Unknown` without tokenizing.
pub fn detect(text: &str, mappings: &Mappings) -> Language {
    if text.trim().is_empty() {
        return Language::Unknown;
    }
    scores(text, mappings).verdict()
}
