use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Largest text accepted from a file or stdin.
pub const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

/// Reads the text to translate, detect or enhance.
pub struct InputReader;

impl InputReader {
    /// Reads `file_path`, or stdin when no path is given.
    pub fn read(file_path: Option<&Path>) -> Result<String> {
        file_path.map_or_else(Self::read_stdin, Self::read_file)
    }

    fn read_file(path: &Path) -> Result<String> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to access input file: {}", path.display()))?;

        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > MAX_INPUT_SIZE {
            bail!(too_large(size, "file"));
        }

        fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))
    }

    #[allow(clippy::significant_drop_tightening)]
    fn read_stdin() -> Result<String> {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 8192];
        let mut stdin = io::stdin().lock();

        loop {
            let bytes_read = stdin
                .read(&mut chunk)
                .context("Failed to read from stdin")?;

            if bytes_read == 0 {
                break;
            }

            buffer.extend_from_slice(&chunk[..bytes_read]);

            if buffer.len() > MAX_INPUT_SIZE {
                bail!(too_large(buffer.len(), "input"));
            }
        }

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}

#[allow(clippy::cast_precision_loss)]
fn too_large(size: usize, what: &str) -> String {
    format!(
        "Input size ({:.1} MB) exceeds maximum allowed size (1 MB).\n\n\
         Consider splitting the {what} into smaller parts.",
        size as f64 / 1024.0 / 1024.0
    )
}
