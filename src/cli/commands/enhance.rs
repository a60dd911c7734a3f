use anyhow::Result;
use std::path::PathBuf;

use crate::glossary::enhance;
use crate::input::InputReader;

/// Prints the input with Bikol glosses after recognized English health terms.
pub fn run_enhance(file: Option<PathBuf>) -> Result<()> {
    let text = InputReader::read(file.as_deref())?;
    let enhanced = enhance(&text);

    if enhanced.ends_with('\n') {
        print!("{enhanced}");
    } else {
        println!("{enhanced}");
    }
    Ok(())
}
