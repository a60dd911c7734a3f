use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::paths;
use crate::translation::{DEFAULT_TARGET, Language, parse_language};

/// Environment variable overriding the mappings file location.
pub const MAPPINGS_ENV: &str = "GABAY_MAPPINGS";

/// Default settings in the `[gabay]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GabayConfig {
    /// Location of the translation mappings file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mappings: Option<PathBuf>,
    /// Target language for Bikol input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/gabay/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub gabay: GabayConfig,
}

/// Resolved configuration after merging CLI arguments, environment and config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// The mappings file to load.
    pub mappings_path: PathBuf,
    /// Where Bikol input is translated to when `--to` is not given.
    pub target_language: Language,
}

/// CLI overrides that take precedence over every other source.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Mappings file override.
    pub mappings: Option<PathBuf>,
    /// Target language code override.
    pub to: Option<String>,
}

/// Resolves configuration by merging CLI options with the environment and config file.
///
/// Mappings path: CLI option, then `GABAY_MAPPINGS`, then config file, then
/// the default data directory. Target language: CLI option, then config
/// file, then Filipino.
///
/// # Errors
///
/// Returns an error if the target language code is not recognized or the
/// default data directory cannot be determined.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let mappings_path = match options
        .mappings
        .clone()
        .or_else(mappings_from_env)
        .or_else(|| config_file.gabay.mappings.clone())
    {
        Some(path) => path,
        None => paths::default_mappings_path()?,
    };

    let target_language = match options.to.as_deref().or(config_file.gabay.to.as_deref()) {
        Some(code) => parse_language(code)?,
        None => DEFAULT_TARGET,
    };

    Ok(ResolvedConfig {
        mappings_path,
        target_language,
    })
}

fn mappings_from_env() -> Option<PathBuf> {
    std::env::var_os(MAPPINGS_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/gabay/config.toml`
    /// or `~/.config/gabay/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self::at(paths::config_dir()?.join("config.toml")))
    }

    pub const fn at(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!("Failed to parse config file: {}", self.config_path.display())
        })?;

        Ok(config_file)
    }

    /// Loads the config file, treating a missing file as an empty configuration.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        match fs::metadata(&self.config_path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(ConfigFile::default()),
            _ => self.load(),
        }
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;
        crate::fs::atomic_write(&self.config_path, &contents)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn create_test_manager(temp_dir: &TempDir) -> ConfigManager {
        ConfigManager::at(temp_dir.path().join("config.toml"))
    }

    fn config_with(mappings: Option<&str>, to: Option<&str>) -> ConfigFile {
        ConfigFile {
            gabay: GabayConfig {
                mappings: mappings.map(PathBuf::from),
                to: to.map(str::to_string),
            },
        }
    }

    /// Runs `f` with `GABAY_MAPPINGS` set to `value` (or unset), restoring it afterwards.
    fn with_mappings_env<T>(value: Option<&str>, f: impl FnOnce() -> T) -> T {
        let original = std::env::var_os(MAPPINGS_ENV);
        // SAFETY: env-mutating tests are serialized
        unsafe {
            match value {
                Some(v) => std::env::set_var(MAPPINGS_ENV, v),
                None => std::env::remove_var(MAPPINGS_ENV),
            }
        }
        let result = f();
        unsafe {
            match original {
                Some(v) => std::env::set_var(MAPPINGS_ENV, v),
                None => std::env::remove_var(MAPPINGS_ENV),
            }
        }
        result
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let config = config_with(Some("/srv/gabay/mappings.json"), Some("en"));
        manager.save(&config).unwrap();

        assert_eq!(manager.load().unwrap(), config);
        let raw = fs::read_to_string(manager.config_path()).unwrap();
        assert!(raw.contains("[gabay]"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        assert!(manager.load().is_err());
        assert_eq!(manager.load_or_default().unwrap(), ConfigFile::default());
    }

    #[test]
    fn test_load_or_default_rejects_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        fs::write(manager.config_path(), "[gabay\nto = ").unwrap();

        let err = manager.load_or_default().unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_empty_section_is_allowed() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        fs::write(manager.config_path(), "").unwrap();

        assert_eq!(manager.load().unwrap(), ConfigFile::default());
    }

    #[test]
    #[serial]
    fn test_resolve_config_cli_overrides_everything() {
        let options = ResolveOptions {
            mappings: Some(PathBuf::from("/cli/mappings.json")),
            to: Some("en".to_string()),
        };
        let config = config_with(Some("/file/mappings.json"), Some("fil"));

        let resolved = with_mappings_env(Some("/env/mappings.json"), || {
            resolve_config(&options, &config).unwrap()
        });

        assert_eq!(resolved.mappings_path, PathBuf::from("/cli/mappings.json"));
        assert_eq!(resolved.target_language, Language::English);
    }

    #[test]
    #[serial]
    fn test_resolve_config_env_overrides_file() {
        let config = config_with(Some("/file/mappings.json"), None);

        let resolved = with_mappings_env(Some("/env/mappings.json"), || {
            resolve_config(&ResolveOptions::default(), &config).unwrap()
        });

        assert_eq!(resolved.mappings_path, PathBuf::from("/env/mappings.json"));
    }

    #[test]
    #[serial]
    fn test_resolve_config_falls_back_to_file() {
        let config = config_with(Some("/file/mappings.json"), Some("english"));

        let resolved = with_mappings_env(None, || {
            resolve_config(&ResolveOptions::default(), &config).unwrap()
        });

        assert_eq!(resolved.mappings_path, PathBuf::from("/file/mappings.json"));
        assert_eq!(resolved.target_language, Language::English);
    }

    #[test]
    #[serial]
    fn test_resolve_config_defaults() {
        let resolved = with_mappings_env(None, || {
            resolve_config(&ResolveOptions::default(), &ConfigFile::default()).unwrap()
        });

        assert!(resolved.mappings_path.ends_with("gabay/translation_mappings.json"));
        assert_eq!(resolved.target_language, Language::Filipino);
    }

    #[test]
    #[serial]
    fn test_resolve_config_empty_env_is_ignored() {
        let config = config_with(Some("/file/mappings.json"), None);

        let resolved = with_mappings_env(Some(""), || {
            resolve_config(&ResolveOptions::default(), &config).unwrap()
        });

        assert_eq!(resolved.mappings_path, PathBuf::from("/file/mappings.json"));
    }

    #[test]
    #[serial]
    fn test_resolve_config_invalid_target_language() {
        let config = config_with(Some("/file/mappings.json"), Some("klingon"));

        let err = with_mappings_env(None, || {
            resolve_config(&ResolveOptions::default(), &config).unwrap_err()
        });

        assert!(err.to_string().contains("Invalid language code"));
    }
}
