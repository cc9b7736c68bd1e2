//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod layout;
mod misc;


use crate::schema::OpdeckConfig;
use opdeck_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &OpdeckConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    layout::validate_panels(&mut errors, config);
    layout::validate_roles(&mut errors, config);
    misc::validate_breakpoints(&mut errors, config);
    misc::validate_tabs(&mut errors, config);
    misc::validate_events(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
