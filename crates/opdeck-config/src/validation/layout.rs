//! Panel set validation: bounds, unique ids, and the main/trailing roles.

use std::collections::HashSet;

use tracing::warn;

use crate::schema::{OpdeckConfig, PanelPosition};

use super::helpers::validate_positive;

/// Validate every sized panel's widths and reject duplicate ids.
///
/// Center panels flex, so their width fields are ignored.
pub(crate) fn validate_panels(errors: &mut Vec<String>, config: &OpdeckConfig) {
    let mut seen = HashSet::new();

    for (i, panel) in config.layout.panels.iter().enumerate() {
        let name = format!("layout.panels[{i}]");

        if panel.id.trim().is_empty() {
            errors.push(format!("{name}.id must not be empty"));
        } else if !seen.insert(panel.id.as_str()) {
            errors.push(format!("{name}.id = {:?} is a duplicate", panel.id));
        }

        if panel.position == PanelPosition::Center {
            continue;
        }

        validate_positive(errors, &format!("{name}.min_width"), panel.min_width);
        validate_positive(errors, &format!("{name}.max_width"), panel.max_width);
        validate_positive(errors, &format!("{name}.default_width"), panel.default_width);

        if panel.min_width > panel.max_width {
            errors.push(format!(
                "{name} ({}): min_width {} > max_width {}",
                panel.id, panel.min_width, panel.max_width
            ));
        }
    }
}

/// Validate that the main panel exists and is centered, and that the
/// trailing panel, when present, sits on the right.
pub(crate) fn validate_roles(errors: &mut Vec<String>, config: &OpdeckConfig) {
    let layout = &config.layout;

    match layout.panel(&layout.main_panel) {
        None => errors.push(format!(
            "layout.main_panel = {:?} does not name a panel",
            layout.main_panel
        )),
        Some(p) if p.position != PanelPosition::Center => errors.push(format!(
            "layout.main_panel = {:?} must have position \"center\"",
            layout.main_panel
        )),
        Some(_) => {}
    }

    let centers = layout
        .panels
        .iter()
        .filter(|p| p.position == PanelPosition::Center)
        .count();
    if centers > 1 {
        errors.push(format!(
            "layout.panels has {centers} center panels, expected exactly one"
        ));
    }

    if let Some(trailing) = &layout.trailing_panel {
        match layout.panel(trailing) {
            None => {
                warn!(panel = %trailing, "trailing panel not found, tablet layout will not reserve a column");
            }
            Some(p) if p.position != PanelPosition::Right => errors.push(format!(
                "layout.trailing_panel = {trailing:?} must have position \"right\""
            )),
            Some(_) => {}
        }
    }
}
