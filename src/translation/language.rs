//! Language identifiers, codes and translation directions.

use anyhow::Result;
use std::fmt;
use std::str::FromStr;

use crate::error::UsageError;
use crate::ui::Style;

/// A language the assistant understands, or `Unknown` when detection fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Bikol,
    Filipino,
    English,
    Unknown,
}

/// Languages that can be named on the command line or in config.
pub const SUPPORTED_LANGUAGES: &[Language] =
    &[Language::Bikol, Language::Filipino, Language::English];

/// Target language for Bikol input when nothing else is configured.
pub const DEFAULT_TARGET: Language = Language::Filipino;

impl Language {
    /// Lowercase name, as reported by the detector.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bikol => "bikol",
            Self::Filipino => "filipino",
            Self::English => "english",
            Self::Unknown => "unknown",
        }
    }

    /// ISO 639 code (`und` for undetermined).
    pub const fn code(self) -> &'static str {
        match self {
            Self::Bikol => "bcl",
            Self::Filipino => "fil",
            Self::English => "en",
            Self::Unknown => "und",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Bikol => "Bikol",
            Self::Filipino => "Filipino",
            Self::English => "English",
            Self::Unknown => "Unknown",
        }
    }

    /// Parses a language code or name. `Unknown` is never returned.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "bcl" | "bik" | "bikol" | "bicol" => Some(Self::Bikol),
            "fil" | "filipino" | "tl" | "tagalog" => Some(Self::Filipino),
            "en" | "eng" | "english" => Some(Self::English),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the four directional word tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    BikolToFilipino,
    BikolToEnglish,
    FilipinoToBikol,
    EnglishToBikol,
}

impl Direction {
    pub const ALL: [Self; 4] = [
        Self::BikolToFilipino,
        Self::BikolToEnglish,
        Self::FilipinoToBikol,
        Self::EnglishToBikol,
    ];

    /// Key of this table in the mappings file.
    pub const fn table_name(self) -> &'static str {
        match self {
            Self::BikolToFilipino => "bikol_to_filipino",
            Self::BikolToEnglish => "bikol_to_english",
            Self::FilipinoToBikol => "filipino_to_bikol",
            Self::EnglishToBikol => "english_to_bikol",
        }
    }

    pub const fn source(self) -> Language {
        match self {
            Self::BikolToFilipino | Self::BikolToEnglish => Language::Bikol,
            Self::FilipinoToBikol => Language::Filipino,
            Self::EnglishToBikol => Language::English,
        }
    }

    pub const fn target(self) -> Language {
        match self {
            Self::BikolToFilipino => Language::Filipino,
            Self::BikolToEnglish => Language::English,
            Self::FilipinoToBikol | Self::EnglishToBikol => Language::Bikol,
        }
    }

    /// Returns the direction translating `source` into `target`, if a table exists.
    pub const fn between(source: Language, target: Language) -> Option<Self> {
        match (source, target) {
            (Language::Bikol, Language::Filipino) => Some(Self::BikolToFilipino),
            (Language::Bikol, Language::English) => Some(Self::BikolToEnglish),
            (Language::Filipino, Language::Bikol) => Some(Self::FilipinoToBikol),
            (Language::English, Language::Bikol) => Some(Self::EnglishToBikol),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

impl FromStr for Direction {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.table_name() == s.trim())
            .ok_or_else(|| {
                UsageError::new(format!(
                    "Invalid direction: '{s}'\n\n\
                     Valid directions: bikol_to_filipino, bikol_to_english, \
                     filipino_to_bikol, english_to_bikol"
                ))
            })
    }
}

/// Prints all supported language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported languages"));
    for lang in SUPPORTED_LANGUAGES {
        println!(
            "  {} {}",
            Style::code(format!("{:5}", lang.code())),
            Style::secondary(lang.name())
        );
    }
}

/// Parses a language code, failing with a usage error for unknown codes.
pub fn parse_language(code: &str) -> Result<Language> {
    Language::from_code(code).ok_or_else(|| {
        UsageError::new(format!(
            "Invalid language code: '{code}'\n\n\
             Valid language codes: bcl (Bikol), fil (Filipino), en (English)\n\
             Run 'gabay languages' to see all supported codes."
        ))
        .into()
    })
}

/// Resolves the direction for a pair, failing with a usage error when no table exists.
pub fn resolve_direction(source: Language, target: Language) -> Result<Direction> {
    if source == Language::Unknown {
        return Err(UsageError::new(
            "Could not detect the source language\n\n\
             Pass it explicitly with --from <lang> (bcl, fil, en).",
        )
        .into());
    }

    Direction::between(source, target).ok_or_else(|| {
        UsageError::new(format!(
            "No word table translates {} into {}\n\n\
             Supported pairs: bcl → fil, bcl → en, fil → bcl, en → bcl",
            source.name(),
            target.name()
        ))
        .into()
    })
}

/// Picks the target language for `source` when none was requested.
///
/// Non-Bikol input always goes to Bikol; Bikol input goes to `bikol_target`.
pub const fn default_target(source: Language, bikol_target: Language) -> Language {
    match source {
        Language::Bikol => bikol_target,
        _ => Language::Bikol,
    }
}
