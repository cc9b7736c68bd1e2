//! Core TOML config loading: read from path or platform default.

use std::path::Path;

use opdeck_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;
use crate::paths;
use crate::schema::OpdeckConfig;

/// Load config from a specific TOML file path.
///
/// Missing fields fall back to their serde defaults. Validation is left to
/// the caller so a broken file can still be inspected.
pub fn load_from_path(path: &Path) -> Result<OpdeckConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "failed to read {}: {e}",
                path.display()
            )));
        }
    };

    let config: OpdeckConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// If the file does not exist, writes the commented default and returns
/// the defaults.
pub fn load_default() -> Result<OpdeckConfig, ConfigError> {
    let path = paths::config_file()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(OpdeckConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// Write the commented default config to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}
