//! Configure command handler for editing default settings.

use anyhow::Result;
use inquire::{Select, Text};
use std::path::{Path, PathBuf};

use crate::config::{ConfigFile, ConfigManager, GabayConfig, ResolveOptions, resolve_config};
use crate::translation::{DEFAULT_TARGET, Language};
use crate::ui::{Style, handle_prompt_cancellation};

/// Targets Bikol input can be translated into.
const BIKOL_TARGETS: [Language; 2] = [Language::Filipino, Language::English];

/// Runs the configure command.
///
/// With `show`, prints the config file and the settings it resolves to.
/// Otherwise asks for the mappings file and the target for Bikol input.
pub fn run_configure(show: bool) -> Result<()> {
    if show {
        return show_config();
    }
    handle_prompt_cancellation(run_configure_inner)
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default()?;

    print_current_defaults(&config);

    let mappings = prompt_mappings(config.gabay.mappings.as_deref())?;
    let to = select_target_language(config.gabay.to.as_deref())?;

    config.gabay = GabayConfig {
        mappings,
        to: Some(to.code().to_string()),
    };

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );

    Ok(())
}

fn show_config() -> Result<()> {
    let manager = ConfigManager::new()?;
    let config = manager.load_or_default()?;
    let resolved = resolve_config(&ResolveOptions::default(), &config)?;

    println!(
        "{} {}",
        Style::header("Config file"),
        Style::secondary(manager.config_path().display())
    );
    println!();
    print_current_defaults(&config);

    println!("{}", Style::header("Resolved"));
    println!(
        "  {}  {}",
        Style::label("mappings"),
        Style::value(resolved.mappings_path.display())
    );
    println!(
        "  {}        {}",
        Style::label("to"),
        Style::value(resolved.target_language.code())
    );

    Ok(())
}

fn print_current_defaults(config: &ConfigFile) {
    println!("{}", Style::header("Current defaults"));
    println!(
        "  {}  {}",
        Style::label("mappings"),
        config.gabay.mappings.as_ref().map_or_else(
            || Style::secondary("(not set)"),
            |path| Style::value(path.display())
        )
    );
    println!(
        "  {}        {}",
        Style::label("to"),
        config
            .gabay
            .to
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!();
}

fn prompt_mappings(current: Option<&Path>) -> Result<Option<PathBuf>> {
    let current = current.map(|path| path.display().to_string());
    let mut prompt = Text::new("Mappings file:")
        .with_help_message("Leave empty to use the default data directory");

    if let Some(path) = current.as_deref() {
        prompt = prompt.with_default(path);
    }

    let answer = prompt.prompt()?;
    let answer = answer.trim();

    Ok((!answer.is_empty()).then(|| PathBuf::from(answer)))
}

fn select_target_language(default: Option<&str>) -> Result<Language> {
    let options: Vec<String> = BIKOL_TARGETS
        .iter()
        .map(|lang| format!("{} - {}", lang.code(), lang.name()))
        .collect();

    let default = default.and_then(Language::from_code).unwrap_or(DEFAULT_TARGET);
    let default_index = BIKOL_TARGETS
        .iter()
        .position(|lang| *lang == default)
        .unwrap_or(0);

    let selection = Select::new("Translate Bikol input to:", options)
        .with_starting_cursor(default_index)
        .raw_prompt()?;

    Ok(BIKOL_TARGETS[selection.index])
}
