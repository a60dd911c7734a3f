use anyhow::Result;
use std::path::PathBuf;

use super::{load_translator, resolve};
use crate::input::InputReader;
use crate::ui::Style;

pub struct DetectOptions {
    pub file: Option<PathBuf>,
    pub scores: bool,
    pub mappings: Option<PathBuf>,
}

/// Prints the detected language (`bikol`, `filipino`, `english` or `unknown`).
pub fn run_detect(options: DetectOptions) -> Result<()> {
    let config = resolve(options.mappings, None)?;
    let text = InputReader::read(options.file.as_deref())?;
    let translator = load_translator(&config.mappings_path)?;

    println!("{}", translator.detect(&text));

    if options.scores {
        let scores = translator.scores(&text);
        println!("  {}    {}", Style::label("bikol"), scores.bikol);
        println!("  {} {}", Style::label("filipino"), scores.filipino);
        println!("  {}  {}", Style::label("english"), scores.english);
    }

    Ok(())
}
