//! Viewport breakpoints and per-breakpoint arrangement settings.

use serde::{Deserialize, Serialize};

/// Viewport width thresholds, inclusive upper bounds in logical pixels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakpointConfig {
    pub mobile_max: f64,
    pub tablet_max: f64,
}

impl Default for BreakpointConfig {
    fn default() -> Self {
        Self {
            mobile_max: 767.0,
            tablet_max: 1279.0,
        }
    }
}

/// Overlay settings used on mobile viewports.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MobileConfig {
    /// Overlay width as a fraction of the viewport width (valid range: (0, 1]).
    pub overlay_width_fraction: f64,
}

impl Default for MobileConfig {
    fn default() -> Self {
        Self {
            overlay_width_fraction: 0.85,
        }
    }
}

/// Tablet grid settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TabletConfig {
    /// Fixed width of the trailing column in pixels.
    pub trailing_width: f64,
}

impl Default for TabletConfig {
    fn default() -> Self {
        Self {
            trailing_width: 320.0,
        }
    }
}
