use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Errors raised while building or driving the panel layout.
///
/// Bounds problems are configuration errors and surface from setup, never
/// from a drag in progress.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("unknown panel: {0}")]
    UnknownPanel(String),

    #[error("panel {id} has invalid bounds: min {min} > max {max}")]
    InvalidBounds { id: String, min: f64, max: f64 },

    #[error("panel {0} is not resizable")]
    NotResizable(String),

    #[error("non-finite width or pointer position: {0}")]
    NonFinite(f64),
}

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("persistence io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("persistence format error: {0}")]
    Serde(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum OpdeckError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Persist(#[from] PersistError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
