//! Panel geometry: current widths, their bounds, and the drag-resize gesture.
//!
//! Every width the store holds is clamped to its panel's `[min, max]`, at
//! construction, when restoring persisted values, and on every drag step.
//! Committed widths are reported to a [`WidthSink`] for persistence.

mod drag;

#[cfg(test)]
mod tests;

pub use drag::{PointerCapture, PointerHost};

use std::collections::BTreeMap;

use opdeck_common::LayoutError;
use opdeck_config::schema::{PanelDescriptor, PanelPosition};
use tracing::{debug, warn};

use drag::{DragState, NoPointerHost};

/// Receives every committed width change.
pub trait WidthSink {
    fn width_committed(&mut self, panel_id: &str, width: f64);
}

/// Sink that discards widths.
#[derive(Debug, Default)]
pub struct NullSink;

impl WidthSink for NullSink {
    fn width_committed(&mut self, _panel_id: &str, _width: f64) {}
}

#[derive(Debug, Clone)]
pub(crate) struct PanelGeometry {
    pub(crate) id: String,
    pub(crate) position: PanelPosition,
    pub(crate) min_width: f64,
    pub(crate) max_width: f64,
    pub(crate) resizable: bool,
    /// `None` for the flexing center panel.
    pub(crate) width: Option<f64>,
}

impl PanelGeometry {
    fn clamp(&self, width: f64) -> f64 {
        width.clamp(self.min_width, self.max_width)
    }
}

pub struct PanelGeometryStore {
    panels: Vec<PanelGeometry>,
    sink: Box<dyn WidthSink>,
    pointer: Box<dyn PointerHost>,
    drag: Option<DragState>,
}

impl PanelGeometryStore {
    /// Build the store from panel descriptors. Rejects any sized panel
    /// whose `min_width` exceeds its `max_width`.
    pub fn new(panels: &[PanelDescriptor]) -> Result<Self, LayoutError> {
        let mut geometry = Vec::with_capacity(panels.len());
        for panel in panels {
            let sized = panel.position != PanelPosition::Center;
            if sized && panel.min_width > panel.max_width {
                return Err(LayoutError::InvalidBounds {
                    id: panel.id.clone(),
                    min: panel.min_width,
                    max: panel.max_width,
                });
            }
            let mut entry = PanelGeometry {
                id: panel.id.clone(),
                position: panel.position,
                min_width: panel.min_width,
                max_width: panel.max_width,
                resizable: sized && panel.resizable,
                width: None,
            };
            if sized {
                entry.width = Some(entry.clamp(panel.default_width));
            }
            geometry.push(entry);
        }

        Ok(Self {
            panels: geometry,
            sink: Box::new(NullSink),
            pointer: Box::new(NoPointerHost),
            drag: None,
        })
    }

    /// Restore persisted widths. Values are clamped; unknown ids and
    /// non-finite values are skipped.
    pub fn with_persisted(mut self, widths: &BTreeMap<String, f64>) -> Self {
        for (id, &width) in widths {
            match self.panels.iter_mut().find(|p| p.id == *id) {
                Some(panel) if panel.width.is_some() && width.is_finite() => {
                    let clamped = panel.clamp(width);
                    if clamped != width {
                        warn!(panel = %id, stored = width, clamped, "persisted width out of bounds");
                    }
                    panel.width = Some(clamped);
                }
                Some(_) => warn!(panel = %id, "ignoring persisted width"),
                None => debug!(panel = %id, "persisted width for unknown panel ignored"),
            }
        }
        self
    }

    pub fn with_sink(mut self, sink: Box<dyn WidthSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_pointer_host(mut self, pointer: Box<dyn PointerHost>) -> Self {
        self.pointer = pointer;
        self
    }

    /// Current width of a sized panel. `None` for unknown or center panels.
    pub fn width(&self, panel_id: &str) -> Option<f64> {
        self.panel(panel_id).and_then(|p| p.width)
    }

    /// `(min, max)` bounds of a panel.
    pub fn bounds(&self, panel_id: &str) -> Option<(f64, f64)> {
        self.panel(panel_id).map(|p| (p.min_width, p.max_width))
    }

    pub fn is_resizable(&self, panel_id: &str) -> bool {
        self.panel(panel_id).is_some_and(|p| p.resizable)
    }

    /// Snapshot of every sized panel's width.
    pub fn widths(&self) -> BTreeMap<String, f64> {
        self.panels
            .iter()
            .filter_map(|p| p.width.map(|w| (p.id.clone(), w)))
            .collect()
    }

    /// Set a width directly, clamped. Returns the committed value.
    pub fn set_width(&mut self, panel_id: &str, width: f64) -> Result<f64, LayoutError> {
        let idx = self.index_of(panel_id)?;
        if self.panels[idx].width.is_none() {
            return Err(LayoutError::NotResizable(panel_id.to_string()));
        }
        if !width.is_finite() {
            return Err(LayoutError::NonFinite(width));
        }
        Ok(self.commit(idx, width))
    }

    pub(crate) fn panel(&self, panel_id: &str) -> Option<&PanelGeometry> {
        self.panels.iter().find(|p| p.id == panel_id)
    }

    fn index_of(&self, panel_id: &str) -> Result<usize, LayoutError> {
        self.panels
            .iter()
            .position(|p| p.id == panel_id)
            .ok_or_else(|| LayoutError::UnknownPanel(panel_id.to_string()))
    }

    /// Clamp, store, and report. Unchanged widths are not reported.
    fn commit(&mut self, idx: usize, candidate: f64) -> f64 {
        let panel = &mut self.panels[idx];
        let width = panel.clamp(candidate);
        if panel.width != Some(width) {
            panel.width = Some(width);
            self.sink.width_committed(&panel.id, width);
        }
        width
    }
}
