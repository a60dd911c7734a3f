use anyhow::Result;
use std::path::PathBuf;

use super::resolve;
use crate::corpus::{CorpusStats, build_mappings, load_corpus, seed_corpus};
use crate::translation::{Direction, Mappings};
use crate::ui::Style;

pub struct BuildOptions {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub mappings: Option<PathBuf>,
}

/// Builds the four mapping tables from a corpus and writes the mappings file.
pub fn run_build(options: BuildOptions) -> Result<()> {
    let entries = match &options.input {
        Some(path) => load_corpus(path)?,
        None => seed_corpus()?,
    };

    let output = match options.output {
        Some(path) => path,
        None => resolve(options.mappings, None)?.mappings_path,
    };

    let mappings = build_mappings(&entries);
    mappings.save(&output)?;

    let stats = CorpusStats::from_entries(&entries);
    crate::status!(
        "{} Built mappings from {} corpus entries",
        Style::success("✓"),
        stats.entries
    );
    for (category, count) in &stats.categories {
        crate::info!("  {} {count}", Style::label(format!("{category:18}")));
    }
    crate::status!("Saved to {}", Style::secondary(output.display()));

    Ok(())
}

/// Prints the entry count of every table in the current mappings file.
pub fn run_show(mappings: Option<PathBuf>) -> Result<()> {
    let path = resolve(mappings, None)?.mappings_path;
    let exists = path.exists();
    let mappings = Mappings::load(&path)?;

    println!("{}", Style::header("Mappings"));
    println!(
        "  {} {}{}",
        Style::label(format!("{:18}", "file")),
        Style::secondary(path.display()),
        if exists { "" } else { " (not found)" }
    );
    for direction in Direction::ALL {
        println!(
            "  {} {}",
            Style::label(format!("{:18}", direction.table_name())),
            Style::value(mappings.len(direction))
        );
    }

    Ok(())
}
