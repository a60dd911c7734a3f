//! Word-by-word dictionary substitution.

use anyhow::Result;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

use super::detector::{self, LanguageScores};
use super::language::{Direction, Language, default_target, resolve_direction};
use super::mappings::Mappings;

// unwrap is safe: the pattern is a compile-time constant
#[allow(clippy::unwrap_used)]
static WORD_OR_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)|\W+").unwrap());

/// Translator over a fixed set of mapping tables.
///
/// Immutable once built; share it across threads behind an `Arc`, or use
/// [`SharedTranslator`](super::SharedTranslator) when the tables may be
/// reloaded at runtime.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    mappings: Mappings,
}

impl Translator {
    pub const fn new(mappings: Mappings) -> Self {
        Self { mappings }
    }

    /// Loads the mappings file at `path`; a missing file yields a pass-through translator.
    pub fn load(path: &Path) -> Result<Self> {
        Mappings::load(path).map(Self::new)
    }

    pub const fn mappings(&self) -> &Mappings {
        &self.mappings
    }

    /// Looks up a single word. Returns `None` when absent or mapped to an empty string.
    pub fn translate_word(&self, word: &str, direction: Direction) -> Option<&str> {
        self.mappings
            .lookup(direction, word)
            .filter(|translated| !translated.is_empty())
    }

    /// Translates `text` word by word.
    ///
    /// Separators (whitespace, punctuation) are copied verbatim and unknown
    /// words pass through unchanged, so this never fails.
    pub fn translate(&self, text: &str, direction: Direction) -> String {
        let mut out = String::with_capacity(text.len());

        for caps in WORD_OR_SEPARATOR.captures_iter(text) {
            let Some(word) = caps.get(1) else {
                out.push_str(&caps[0]);
                continue;
            };
            let token = word.as_str();

            match self.translate_word(token, direction) {
                Some(translated) if starts_uppercase(token) => {
                    out.push_str(&capitalize_first(translated));
                }
                Some(translated) => out.push_str(translated),
                None => out.push_str(token),
            }
        }

        out
    }

    pub fn detect(&self, text: &str) -> Language {
        detector::detect(text, &self.mappings)
    }

    pub fn scores(&self, text: &str) -> LanguageScores {
        detector::scores(text, &self.mappings)
    }

    /// Picks the table to translate `text` with.
    ///
    /// The source is `from` or the detected language. The target is `to`,
    /// otherwise Bikol for non-Bikol input and `bikol_target` for Bikol input.
    ///
    /// # Errors
    ///
    /// Fails when the source cannot be detected or no table covers the pair.
    pub fn direction_for(
        &self,
        text: &str,
        from: Option<Language>,
        to: Option<Language>,
        bikol_target: Language,
    ) -> Result<Direction> {
        let source = from.unwrap_or_else(|| self.detect(text));
        let target = to.unwrap_or(default_target(source, bikol_target));
        resolve_direction(source, target)
    }
}

fn starts_uppercase(token: &str) -> bool {
    token.chars().next().is_some_and(char::is_uppercase)
}

/// Uppercases the first character only; the rest keeps its stored casing.
fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn scenario_translator() -> Translator {
        let mappings = Mappings::parse(
            r#"{
                "bikol_to_filipino": { "ospital": "ospital" },
                "bikol_to_english": { "ospital": "hospital", "saen": "where", "an": "ang" }
            }"#,
        )
        .unwrap();
        Translator::new(mappings)
    }

    #[test]
    fn test_translate_bikol_question_to_english() {
        let translator = scenario_translator();
        assert_eq!(
            translator.translate("Saen an ospital?", Direction::BikolToEnglish),
            "Where ang hospital?"
        );
    }

    #[test]
    fn test_unknown_words_pass_through_in_every_direction() {
        let translator = scenario_translator();
        let inputs = [
            "",
            "xylophone",
            "Kumain",
            "...!?",
            "Mabuhay ang Pilipinas",
            "  naïve café  ",
            "日本語のテキスト",
            "\t\nSeñora, kumusta?\r\n",
            "42 + 7 = 49",
        ];

        for direction in Direction::ALL {
            for input in inputs {
                assert_eq!(
                    translator.translate(input, direction),
                    input,
                    "{input:?} changed in {direction:?}"
                );
            }
        }
    }

    #[test]
    fn test_empty_input() {
        let translator = scenario_translator();
        assert_eq!(translator.translate("", Direction::BikolToEnglish), "");
    }

    #[test]
    fn test_separators_are_preserved() {
        let translator = scenario_translator();
        let separators =
            |s: &str| -> String { s.chars().filter(|c| !c.is_alphanumeric()).collect() };

        for (input, expected) in [
            ("", ""),
            ("...!?", "...!?"),
            ("  saen  ", "  where  "),
            ("  saen,\tan...ospital!?\n", "  where,\tang...hospital!?\n"),
            ("\n\tOspital.\r\n", "\n\tHospital.\r\n"),
            ("saen-an «ospital»", "where-ang «hospital»"),
            ("Saen an ospital? 🏥", "Where ang hospital? 🏥"),
            ("ñaga saen ñ", "ñaga where ñ"),
        ] {
            let output = translator.translate(input, Direction::BikolToEnglish);
            assert_eq!(output, expected, "input {input:?}");
            assert_eq!(separators(&output), separators(input), "input {input:?}");
        }
    }

    #[test]
    fn test_capitalization_only_touches_first_character() {
        let mut mappings = Mappings::default();
        mappings.bikol_to_english.insert("pc".to_string(), "pHone".to_string());
        let translator = Translator::new(mappings);

        assert_eq!(translator.translate("Pc", Direction::BikolToEnglish), "PHone");
        assert_eq!(translator.translate("PC", Direction::BikolToEnglish), "PHone");
        assert_eq!(translator.translate("pc", Direction::BikolToEnglish), "pHone");
    }

    #[test]
    fn test_multi_word_values_are_substituted_whole() {
        let mut mappings = Mappings::default();
        mappings.insert(Direction::EnglishToBikol, "headache", "kulog nin payo");
        let translator = Translator::new(mappings);

        assert_eq!(
            translator.translate("Headache again", Direction::EnglishToBikol),
            "Kulog nin payo again"
        );
    }

    #[test]
    fn test_multi_word_keys_never_match_single_tokens() {
        let mut mappings = Mappings::default();
        mappings.insert(Direction::BikolToEnglish, "murong siki", "toe");
        let translator = Translator::new(mappings);

        assert_eq!(
            translator.translate("murong siki", Direction::BikolToEnglish),
            "murong siki"
        );
    }

    #[test]
    fn test_empty_value_counts_as_miss() {
        let mut mappings = Mappings::default();
        mappings.bikol_to_english.insert("ta".to_string(), String::new());
        let translator = Translator::new(mappings);

        assert_eq!(translator.translate_word("ta", Direction::BikolToEnglish), None);
        assert_eq!(translator.translate("ta", Direction::BikolToEnglish), "ta");
    }

    #[test]
    fn test_mixed_language_input() {
        let translator = scenario_translator();
        assert_eq!(
            translator.translate("Saan ang ospital?", Direction::BikolToEnglish),
            "Saan ang hospital?"
        );
    }

    #[test]
    fn test_non_latin_text_is_untouched() {
        let translator = scenario_translator();
        let input = "病院はどこ? 🏥 — ospital";
        assert_eq!(
            translator.translate(input, Direction::BikolToEnglish),
            "病院はどこ? 🏥 — hospital"
        );
    }

    #[test]
    fn test_load_missing_file_passes_through() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let translator = Translator::load(&temp_dir.path().join("nope.json")).unwrap();

        assert!(translator.mappings().is_empty());
        assert_eq!(
            translator.translate("ospital", Direction::BikolToEnglish),
            "ospital"
        );
    }

    #[test]
    fn test_translator_detects() {
        let translator = scenario_translator();
        assert_eq!(translator.detect("Maray na aga!"), Language::Bikol);
        assert_eq!(translator.detect(""), Language::Unknown);
    }

    #[test]
    fn test_direction_for_detected_source() {
        let translator = scenario_translator();

        let direction = translator
            .direction_for("Maray na aga!", None, None, Language::English)
            .unwrap();
        assert_eq!(direction, Direction::BikolToEnglish);

        let direction = translator
            .direction_for("Where is the hospital?", None, None, Language::Filipino)
            .unwrap();
        assert_eq!(direction, Direction::EnglishToBikol);
    }

    #[test]
    fn test_direction_for_explicit_languages() {
        let translator = scenario_translator();

        let direction = translator
            .direction_for(
                "xylophone",
                Some(Language::Bikol),
                Some(Language::Filipino),
                Language::English,
            )
            .unwrap();
        assert_eq!(direction, Direction::BikolToFilipino);

        let err = translator
            .direction_for(
                "kumusta",
                Some(Language::Filipino),
                Some(Language::English),
                Language::Filipino,
            )
            .unwrap_err();
        assert!(err.to_string().contains("No word table translates"));
    }

    #[test]
    fn test_direction_for_undetectable_source() {
        let translator = scenario_translator();
        let err = translator
            .direction_for("xylophone", None, None, Language::Filipino)
            .unwrap_err();
        assert!(err.to_string().contains("--from"));
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("where"), "Where");
        assert_eq!(capitalize_first("ñino"), "Ñino");
        assert_eq!(capitalize_first(""), "");
    }
}
