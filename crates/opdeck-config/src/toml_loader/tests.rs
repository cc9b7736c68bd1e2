//! Tests for TOML config loading and default file creation.

use super::*;
use crate::schema::{OpdeckConfig, PanelPosition};
use opdeck_common::ConfigError;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_opdeck_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[breakpoints]
mobile_max = 599.0

[tabs]
home_redirect_delay_ms = 250
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.breakpoints.mobile_max, 599.0);
    assert_eq!(config.tabs.home_redirect_delay_ms, 250);
    // Defaults preserved
    assert_eq!(config.breakpoints.tablet_max, 1279.0);
    assert_eq!(config.layout.main_panel, "main");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn template_parses_to_defaults() {
    let parsed: OpdeckConfig = toml::from_str(default_config_toml()).unwrap();
    let defaults = OpdeckConfig::default();
    assert_eq!(parsed.layout.panels, defaults.layout.panels);
    assert_eq!(parsed.layout.trailing_panel, defaults.layout.trailing_panel);
    assert_eq!(parsed.breakpoints.mobile_max, defaults.breakpoints.mobile_max);
    assert_eq!(parsed.tabs.max_title_len, defaults.tabs.max_title_len);
    assert!(crate::validation::validate(&parsed).is_ok());
}

#[test]
fn create_default_config_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    create_default_config(&path).unwrap();

    let config = load_from_path(&path).unwrap();
    let explorer = config.layout.panel("file-explorer").unwrap();
    assert_eq!(explorer.position, PanelPosition::Left);
    assert_eq!(explorer.min_width, 200.0);
}
