//! Configuration schema types for Opdeck.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod breakpoints;
mod layout;
mod tabs;

pub use breakpoints::*;
pub use layout::*;
pub use tabs::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OpdeckConfig {
    pub layout: LayoutConfig,
    pub breakpoints: BreakpointConfig,
    pub mobile: MobileConfig,
    pub tablet: TabletConfig,
    pub tabs: TabsConfig,
    pub persistence: PersistenceConfig,
    pub events: EventsConfig,
}

// =============================================================================
// Tests
// =============================================================================
