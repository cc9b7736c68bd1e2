//! Tab behavior, persistence, and event bus settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Tab registry behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TabsConfig {
    /// Delay before an empty tab strip sends the user back home (valid range: 1-5000).
    pub home_redirect_delay_ms: u64,
    /// Titles longer than this are truncated with an ellipsis.
    pub max_title_len: usize,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            home_redirect_delay_ms: 100,
            max_title_len: 40,
        }
    }
}

/// Panel width persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistenceConfig {
    pub enabled: bool,
    /// Override for the widths file. Defaults to `<data_dir>/opdeck/panel-widths.json`.
    pub widths_file: Option<PathBuf>,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            widths_file: None,
        }
    }
}

/// Event bus settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EventsConfig {
    /// Buffer size of the async watch channel.
    pub watch_capacity: usize,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self { watch_capacity: 64 }
    }
}
