use anyhow::{Result, bail};
use std::path::PathBuf;

use super::{load_translator, resolve};
use crate::translation::{parse_language, resolve_direction};

pub struct LookupOptions {
    pub word: String,
    pub from: String,
    pub to: String,
    pub mappings: Option<PathBuf>,
}

pub fn run_lookup(options: LookupOptions) -> Result<()> {
    let direction = resolve_direction(parse_language(&options.from)?, parse_language(&options.to)?)?;
    let config = resolve(options.mappings, None)?;
    let translator = load_translator(&config.mappings_path)?;

    let Some(translated) = translator.translate_word(&options.word, direction) else {
        bail!(
            "'{}' is not in the {} table",
            options.word.trim(),
            direction.table_name()
        );
    };

    println!("{translated}");
    Ok(())
}
