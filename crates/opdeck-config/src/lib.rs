//! Opdeck configuration system.
//!
//! TOML-based configuration for the workspace shell: the panel set and its
//! bounds, breakpoint thresholds, tab behavior, and width persistence.
//! Every section has defaults, so a partial file (or none) is fine.

pub mod paths;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{OpdeckConfig, PanelDescriptor, PanelPosition};

use opdeck_common::ConfigError;

/// Load config from the platform default path and validate it.
///
/// Creates a commented default file if none exists yet.
pub fn load_config() -> Result<OpdeckConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path and validate it.
pub fn load_config_from(path: &std::path::Path) -> Result<OpdeckConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &OpdeckConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
