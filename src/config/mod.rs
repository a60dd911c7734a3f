//! Configuration file management and setting resolution.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, GabayConfig, MAPPINGS_ENV, ResolveOptions, ResolvedConfig,
    resolve_config,
};
