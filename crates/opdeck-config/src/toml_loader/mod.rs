//! TOML config loading with defaults and first-run file creation.

mod loader;
mod template;

#[cfg(test)]
mod tests;

pub use loader::{create_default_config, load_default, load_from_path};
pub use template::default_config_toml;
