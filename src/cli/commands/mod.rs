//! Subcommand implementations.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};
use crate::translation::Translator;

/// Chat mode command handler.
pub mod chat;

/// Configure command handler.
pub mod configure;

/// Corpus build/show command handlers.
pub mod corpus;

/// Language detection command handler.
pub mod detect;

/// Response enhancement command handler.
pub mod enhance;

/// Single-word lookup command handler.
pub mod lookup;

/// Glossary command handler.
pub mod terms;

/// Translation command handler.
pub mod translate;

/// Loads the config file and merges it with the CLI overrides.
fn resolve(mappings: Option<PathBuf>, to: Option<String>) -> Result<ResolvedConfig> {
    let file_config = ConfigManager::new()?.load_or_default()?;
    resolve_config(&ResolveOptions { mappings, to }, &file_config)
}

/// Loads the translator, warning when the mappings file does not exist yet.
fn load_translator(path: &Path) -> Result<Translator> {
    warn_if_missing(path);
    Translator::load(path)
}

fn warn_if_missing(path: &Path) {
    if !path.exists() {
        crate::warn!(
            "Mappings file not found: {}\n\
             Words will pass through untranslated. Run 'gabay corpus build' to create it.",
            path.display()
        );
    }
}
