//! Consistent styling utilities for CLI output.
//!
//! Provides color and formatting helpers using owo-colors. Every helper
//! falls back to plain text when colors are disabled.

use owo_colors::OwoColorize;
use std::fmt::Display;

use crate::output;

/// Styles for different semantic elements.
pub struct Style;

fn paint<T: Display>(text: T, styled: impl FnOnce(&T) -> String) -> String {
    if output::is_no_color() {
        text.to_string()
    } else {
        styled(&text)
    }
}

impl Style {
    /// Style for section headers (e.g., "Configuration", "Health terms")
    pub fn header<T: Display>(text: T) -> String {
        paint(text, |t| format!("{}", t.bold()))
    }

    /// Style for labels/keys (e.g., "mappings", "to")
    pub fn label<T: Display>(text: T) -> String {
        paint(text, |t| format!("{}", t.dimmed()))
    }

    /// Style for primary values (e.g., language names, Bikol terms)
    pub fn value<T: Display>(text: T) -> String {
        paint(text, |t| format!("{}", t.cyan()))
    }

    /// Style for secondary/supplementary info (e.g., paths, descriptions)
    pub fn secondary<T: Display>(text: T) -> String {
        paint(text, |t| format!("{}", t.dimmed()))
    }

    /// Style for success messages
    pub fn success<T: Display>(text: T) -> String {
        paint(text, |t| format!("{}", t.green()))
    }

    /// Style for error messages
    pub fn error<T: Display>(text: T) -> String {
        paint(text, |t| format!("{}", t.red().bold()))
    }

    /// Style for warning messages
    pub fn warning<T: Display>(text: T) -> String {
        paint(text, |t| format!("{}", t.yellow()))
    }

    /// Style for commands (e.g., "/reload", "/help")
    pub fn command<T: Display>(text: T) -> String {
        paint(text, |t| format!("{}", t.green()))
    }

    /// Style for language codes
    pub fn code<T: Display>(text: T) -> String {
        paint(text, |t| format!("{}", t.yellow()))
    }

    /// Style for version info
    pub fn version<T: Display>(text: T) -> String {
        paint(text, |t| format!("{}", t.dimmed()))
    }
}
