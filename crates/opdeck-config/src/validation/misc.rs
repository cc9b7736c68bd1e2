//! Breakpoint, tab, and event bus validation.

use crate::schema::OpdeckConfig;

use super::helpers::{validate_open_closed_f64, validate_positive, validate_range};

pub(crate) fn validate_breakpoints(errors: &mut Vec<String>, config: &OpdeckConfig) {
    let bp = &config.breakpoints;
    validate_positive(errors, "breakpoints.mobile_max", bp.mobile_max);
    validate_positive(errors, "breakpoints.tablet_max", bp.tablet_max);
    if bp.mobile_max >= bp.tablet_max {
        errors.push(format!(
            "breakpoints.mobile_max ({}) must be less than breakpoints.tablet_max ({})",
            bp.mobile_max, bp.tablet_max
        ));
    }

    validate_open_closed_f64(
        errors,
        "mobile.overlay_width_fraction",
        config.mobile.overlay_width_fraction,
        0.0,
        1.0,
    );
    validate_positive(errors, "tablet.trailing_width", config.tablet.trailing_width);
}

pub(crate) fn validate_tabs(errors: &mut Vec<String>, config: &OpdeckConfig) {
    validate_range(
        errors,
        "tabs.home_redirect_delay_ms",
        config.tabs.home_redirect_delay_ms,
        1,
        5000,
    );
    if config.tabs.max_title_len < 4 {
        errors.push(format!(
            "tabs.max_title_len = {} must be at least 4",
            config.tabs.max_title_len
        ));
    }
}

pub(crate) fn validate_events(errors: &mut Vec<String>, config: &OpdeckConfig) {
    if config.events.watch_capacity == 0 {
        errors.push("events.watch_capacity must be at least 1".into());
    }
}
