//! Bikol / Filipino / English translation core.
//!
//! Everything here is a pure function over the input text and the mapping
//! tables loaded at startup; only [`SharedTranslator`] has interior state.

mod detector;
mod language;
mod mappings;
mod shared;
mod translator;

pub use detector::{
    BIKOL_MARKERS, ENGLISH_MARKERS, FILIPINO_MARKERS, LanguageScores, detect, scores, tokenize,
};
pub use language::{
    DEFAULT_TARGET, Direction, Language, SUPPORTED_LANGUAGES, default_target, parse_language,
    print_languages, resolve_direction,
};
pub use mappings::{Mappings, WordTable, normalize_word};
pub use shared::SharedTranslator;
pub use translator::Translator;
