//! Panel set and column configuration.

use serde::{Deserialize, Serialize};

/// Horizontal slot a panel occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelPosition {
    Left,
    Center,
    Right,
}

impl PanelPosition {
    /// Sort key for the desktop row: left, then center, then right.
    pub fn order(self) -> u8 {
        match self {
            PanelPosition::Left => 0,
            PanelPosition::Center => 1,
            PanelPosition::Right => 2,
        }
    }
}

/// Static description of one panel. Widths are in logical pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelDescriptor {
    pub id: String,
    pub position: PanelPosition,
    #[serde(default)]
    pub default_width: f64,
    #[serde(default)]
    pub min_width: f64,
    #[serde(default)]
    pub max_width: f64,
    #[serde(default)]
    pub resizable: bool,
    #[serde(default)]
    pub visible: bool,
}

impl PanelDescriptor {
    pub fn sized(
        id: impl Into<String>,
        position: PanelPosition,
        default_width: f64,
        min_width: f64,
        max_width: f64,
    ) -> Self {
        Self {
            id: id.into(),
            position,
            default_width,
            min_width,
            max_width,
            resizable: true,
            visible: false,
        }
    }

    pub fn main(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            position: PanelPosition::Center,
            default_width: 0.0,
            min_width: 0.0,
            max_width: 0.0,
            resizable: false,
            visible: true,
        }
    }
}

/// Panel layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Id of the main content panel. It flexes to fill the remaining space.
    pub main_panel: String,
    /// Panel given its own fixed column on tablets.
    pub trailing_panel: Option<String>,
    /// Desktop column template override, e.g. `"280px 1fr 320px"`.
    pub column_template: Option<String>,
    pub panels: Vec<PanelDescriptor>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            main_panel: "main".into(),
            trailing_panel: Some("timeline".into()),
            column_template: None,
            panels: vec![
                PanelDescriptor::sized("file-explorer", PanelPosition::Left, 280.0, 200.0, 600.0),
                PanelDescriptor::main("main"),
                PanelDescriptor::sized("git-status", PanelPosition::Right, 320.0, 240.0, 640.0),
                PanelDescriptor::sized("timeline", PanelPosition::Right, 320.0, 240.0, 560.0),
            ],
        }
    }
}

impl LayoutConfig {
    pub fn panel(&self, id: &str) -> Option<&PanelDescriptor> {
        self.panels.iter().find(|p| p.id == id)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_defaults() {
        let config = LayoutConfig::default();
        assert_eq!(config.main_panel, "main");
        assert_eq!(config.trailing_panel.as_deref(), Some("timeline"));
        let explorer = config.panel("file-explorer").unwrap();
        assert_eq!(explorer.position, PanelPosition::Left);
        assert_eq!(explorer.default_width, 280.0);
        assert!(explorer.resizable);
        assert!(!explorer.visible);
        assert!(config.panel("main").unwrap().visible);
    }

    #[test]
    fn position_order() {
        assert!(PanelPosition::Left.order() < PanelPosition::Center.order());
        assert!(PanelPosition::Center.order() < PanelPosition::Right.order());
    }

    #[test]
    fn panels_from_toml() {
        let config: LayoutConfig = toml::from_str(
            r#"
main_panel = "editor"

[[panels]]
id = "editor"
position = "center"
visible = true

[[panels]]
id = "outline"
position = "right"
default_width = 240.0
min_width = 180.0
max_width = 400.0
resizable = true
"#,
        )
        .unwrap();
        assert_eq!(config.main_panel, "editor");
        assert_eq!(config.panels.len(), 2);
        assert_eq!(config.panels[1].position, PanelPosition::Right);
        assert_eq!(config.panels[1].max_width, 400.0);
        // Untouched field keeps its default.
        assert_eq!(config.trailing_panel.as_deref(), Some("timeline"));
    }
}
