//! Bikol health terminology.
//!
//! Provides the health-term glossary and the response enhancer that adds
//! Bikol glosses after English health terms, e.g.
//! `"Take medicine for fever"` becomes
//! `"Take medicine (bulong) for fever (kalintura)"`.

use regex::Regex;
use std::sync::LazyLock;

/// A health term and its Bikol equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthTerm {
    /// The English term (lowercase).
    pub english: &'static str,
    /// The Bikol term.
    pub bikol: &'static str,
    /// Glossary grouping ("symptom", "facility", "treatment").
    pub category: &'static str,
}

const fn term(english: &'static str, bikol: &'static str, category: &'static str) -> HealthTerm {
    HealthTerm {
        english,
        bikol,
        category,
    }
}

/// All glossary terms available for lookup.
pub const HEALTH_TERMS: &[HealthTerm] = &[
    term("headache", "kulog nin payo", "symptom"),
    term("fever", "kalintura", "symptom"),
    term("cold", "sipon", "symptom"),
    term("cough", "ubo", "symptom"),
    term("stomachache", "kulog nin tulak", "symptom"),
    term("diarrhea", "kurso", "symptom"),
    term("vomiting", "suka", "symptom"),
    term("dizziness", "lipong", "symptom"),
    term("pain", "kulog", "symptom"),
    term("swelling", "paga", "symptom"),
    term("hospital", "ospital", "facility"),
    term("pharmacy", "botica", "facility"),
    term("clinic", "klinika", "facility"),
    term("doctor", "doktor", "facility"),
    term("nurse", "nars", "facility"),
    term("medicine", "bulong", "treatment"),
    term("prescription", "reseta", "treatment"),
    term("vaccine", "bakuna", "treatment"),
];

/// Terms the enhancer annotates, in application order.
pub const ENHANCEMENT_TERMS: &[(&str, &str)] = &[
    ("headache", "kulog nin payo"),
    ("fever", "kalintura"),
    ("cough", "ubo"),
    ("cold", "sipon"),
    ("stomachache", "kulog nin tulak"),
    ("diarrhea", "kurso"),
    ("hospital", "ospital"),
    ("pharmacy", "botica"),
    ("medicine", "bulong"),
    ("doctor", "doktor"),
    ("nurse", "nars"),
    ("pain", "kulog"),
    ("dizziness", "lipong"),
];

// unwrap is safe: every pattern is an escaped compile-time constant
#[allow(clippy::unwrap_used)]
static ENHANCEMENT_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    ENHANCEMENT_TERMS
        .iter()
        .map(|(english, bikol)| {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(english));
            (Regex::new(&pattern).unwrap(), *bikol)
        })
        .collect()
});

/// Looks up the Bikol equivalent of an English health term (case-insensitive).
pub fn health_term(english: &str) -> Option<&'static HealthTerm> {
    let wanted = english.trim();
    HEALTH_TERMS
        .iter()
        .find(|t| t.english.eq_ignore_ascii_case(wanted))
}

/// Appends `(bikol)` after each recognized English health term.
///
/// Terms are applied in [`ENHANCEMENT_TERMS`] order over the progressively
/// rewritten text. Matches are whole-word and case-insensitive and keep
/// their original casing. An occurrence already followed by `(` (after
/// optional whitespace) is left alone, which makes this idempotent.
pub fn enhance(text: &str) -> String {
    ENHANCEMENT_PATTERNS
        .iter()
        .fold(text.to_string(), |acc, (pattern, gloss)| {
            annotate(&acc, pattern, gloss)
        })
}

fn annotate(text: &str, pattern: &Regex, gloss: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for m in pattern.find_iter(text) {
        out.push_str(&text[last..m.end()]);
        if !already_glossed(&text[m.end()..]) {
            out.push_str(" (");
            out.push_str(gloss);
            out.push(')');
        }
        last = m.end();
    }

    out.push_str(&text[last..]);
    out
}

fn already_glossed(rest: &str) -> bool {
    rest.trim_start().starts_with('(')
}
