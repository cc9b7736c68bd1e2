//! Platform-specific locations for Opdeck files.

use std::path::PathBuf;

use opdeck_common::ConfigError;

const APP_NAME: &str = "opdeck";

/// Returns the Opdeck configuration directory.
///
/// - macOS: `~/Library/Application Support/opdeck`
/// - Linux: `$XDG_CONFIG_HOME/opdeck` (defaults to `~/.config/opdeck`)
/// - Windows: `%APPDATA%\opdeck`
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|d| d.join(APP_NAME))
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))
}

/// Returns the Opdeck data directory.
///
/// - macOS: `~/Library/Application Support/opdeck`
/// - Linux: `$XDG_DATA_HOME/opdeck` (defaults to `~/.local/share/opdeck`)
/// - Windows: `%APPDATA%\opdeck`
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    dirs::data_dir()
        .map(|d| d.join(APP_NAME))
        .ok_or_else(|| ConfigError::ParseError("could not determine data directory".into()))
}

/// Returns the path to the main configuration file.
pub fn config_file() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Returns the default path of the persisted panel widths.
pub fn widths_file() -> Result<PathBuf, ConfigError> {
    Ok(data_dir()?.join("panel-widths.json"))
}
