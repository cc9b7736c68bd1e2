//! Viewport classification.

use std::fmt;

use opdeck_config::schema::BreakpointConfig;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    /// Classify a viewport width. Thresholds are inclusive upper bounds.
    pub fn classify(width: f64, config: &BreakpointConfig) -> Self {
        if width <= config.mobile_max {
            Breakpoint::Mobile
        } else if width <= config.tablet_max {
            Breakpoint::Tablet
        } else {
            Breakpoint::Desktop
        }
    }

    /// Drag-resize is offered inline only; mobile overlays have fixed widths.
    pub fn allows_resize(self) -> bool {
        !matches!(self, Breakpoint::Mobile)
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Breakpoint::Mobile => "mobile",
            Breakpoint::Tablet => "tablet",
            Breakpoint::Desktop => "desktop",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_default_thresholds() {
        let config = BreakpointConfig::default();
        assert_eq!(Breakpoint::classify(375.0, &config), Breakpoint::Mobile);
        assert_eq!(Breakpoint::classify(767.0, &config), Breakpoint::Mobile);
        assert_eq!(Breakpoint::classify(768.0, &config), Breakpoint::Tablet);
        assert_eq!(Breakpoint::classify(1279.0, &config), Breakpoint::Tablet);
        assert_eq!(Breakpoint::classify(1280.0, &config), Breakpoint::Desktop);
        assert_eq!(Breakpoint::classify(3840.0, &config), Breakpoint::Desktop);
    }

    #[test]
    fn resize_only_inline() {
        assert!(!Breakpoint::Mobile.allows_resize());
        assert!(Breakpoint::Tablet.allows_resize());
        assert!(Breakpoint::Desktop.allows_resize());
    }
}
