//! XDG-style path utilities for configuration and data directories.
//!
//! Paths follow XDG Base Directory conventions on every platform rather
//! than OS-specific locations, so the same config and mappings layout works
//! on Linux and macOS.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// File name of the mapping tables inside the data directory.
pub const MAPPINGS_FILE_NAME: &str = "translation_mappings.json";

/// Returns the configuration directory for gabay.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/gabay` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/gabay` otherwise
pub fn config_dir() -> Result<PathBuf> {
    match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join("gabay")),
        _ => Ok(home_dir()?.join(".config").join("gabay")),
    }
}

/// Returns the data directory for gabay, where the mapping tables live.
///
/// Resolution order:
/// 1. `$XDG_DATA_HOME/gabay` if `XDG_DATA_HOME` is set
/// 2. `~/.local/share/gabay` otherwise
pub fn data_dir() -> Result<PathBuf> {
    match std::env::var("XDG_DATA_HOME") {
        Ok(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join("gabay")),
        _ => Ok(home_dir()?.join(".local").join("share").join("gabay")),
    }
}

/// Default location of the mappings file.
pub fn default_mappings_path() -> Result<PathBuf> {
    Ok(data_dir()?.join(MAPPINGS_FILE_NAME))
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Failed to determine home directory")
}
