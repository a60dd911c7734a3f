use anyhow::Result;
use std::io::{self, Write};
use std::path::PathBuf;

use super::{load_translator, resolve};
use crate::error::UsageError;
use crate::input::InputReader;
use crate::translation::parse_language;
use crate::ui::Style;

pub struct TranslateOptions {
    pub file: Option<PathBuf>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub mappings: Option<PathBuf>,
}

/// Translates a file or stdin word by word and prints the result to stdout.
pub fn run_translate(options: TranslateOptions) -> Result<()> {
    let from = options.from.as_deref().map(parse_language).transpose()?;
    let explicit_to = options.to.is_some();
    let config = resolve(options.mappings, options.to)?;
    let to = explicit_to.then_some(config.target_language);

    let source_text = InputReader::read(options.file.as_deref())?;
    if source_text.trim().is_empty() {
        return Err(UsageError::new("Input is empty").into());
    }

    let translator = load_translator(&config.mappings_path)?;
    let direction = translator.direction_for(&source_text, from, to, config.target_language)?;

    crate::info!(
        "{} {} → {}",
        Style::secondary("Translating"),
        Style::value(direction.source().name()),
        Style::value(direction.target().name())
    );

    let translated = translator.translate(&source_text, direction);
    let mut stdout = io::stdout().lock();
    write!(stdout, "{translated}")?;
    if !translated.ends_with('\n') {
        writeln!(stdout)?;
    }
    stdout.flush()?;

    Ok(())
}
