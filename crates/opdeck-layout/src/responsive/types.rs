//! Arrangement types produced by the responsive layout.

use opdeck_config::schema::PanelPosition;
use serde::Serialize;

/// How the visible panels should be placed for the current viewport.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum Arrangement {
    /// Main content full-size, side panels as overlays sliding in from
    /// their edge, with a backdrop whenever any overlay is shown.
    Mobile {
        main: String,
        overlays: Vec<Overlay>,
        backdrop: bool,
    },
    /// A primary grid plus an optional fixed trailing column.
    Tablet {
        primary: GridRow,
        trailing: Option<TrailingColumn>,
    },
    /// All visible panels inline, left to right.
    Desktop { row: GridRow },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overlay {
    pub id: String,
    pub edge: PanelPosition,
    pub width: f64,
}

/// A row of inline columns and the template string that sizes them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridRow {
    pub columns: Vec<Column>,
    pub template: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub id: String,
    /// Pixel width, or `None` for the flexing main panel.
    pub width: Option<f64>,
    /// Whether a resize handle is shown.
    pub resizable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrailingColumn {
    pub id: String,
    pub width: f64,
}

impl GridRow {
    pub(crate) fn new(columns: Vec<Column>) -> Self {
        let template = columns
            .iter()
            .map(|c| match c.width {
                Some(w) => format!("{w}px"),
                None => "1fr".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ");
        Self { columns, template }
    }

    pub fn ids(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.id.as_str()).collect()
    }
}
