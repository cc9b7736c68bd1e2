//! Drag-resize gesture.
//!
//! Pointer-down on a resize handle starts the gesture and captures the
//! pointer through the [`PointerHost`]. Moves adjust the width relative to
//! the starting point. Pointer-up ends it and releases the capture. The
//! capture is a guard, so dropping the store mid-drag releases it too.

use opdeck_common::LayoutError;
use opdeck_config::schema::PanelPosition;
use tracing::debug;

use super::PanelGeometryStore;

/// Routes global pointer move/up events to the store for one gesture.
pub trait PointerHost {
    fn capture(&mut self, panel_id: &str) -> PointerCapture;
}

/// Releases a pointer capture when dropped.
pub struct PointerCapture {
    release: Option<Box<dyn FnOnce()>>,
}

impl PointerCapture {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A capture with nothing to release.
    pub fn none() -> Self {
        Self { release: None }
    }
}

impl Drop for PointerCapture {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// Host for callers that deliver pointer events themselves.
pub(super) struct NoPointerHost;

impl PointerHost for NoPointerHost {
    fn capture(&mut self, _panel_id: &str) -> PointerCapture {
        PointerCapture::none()
    }
}

pub(super) struct DragState {
    panel: usize,
    start_x: f64,
    start_width: f64,
    _capture: PointerCapture,
}

impl PanelGeometryStore {
    /// Pointer-down on `panel_id`'s resize handle at `x`.
    ///
    /// A gesture already in progress is ended first.
    pub fn begin_drag(&mut self, panel_id: &str, x: f64) -> Result<(), LayoutError> {
        let idx = self.index_of(panel_id)?;
        if !x.is_finite() {
            return Err(LayoutError::NonFinite(x));
        }
        let panel = &self.panels[idx];
        let Some(start_width) = panel.width.filter(|_| panel.resizable) else {
            return Err(LayoutError::NotResizable(panel_id.to_string()));
        };

        self.end_drag();
        let capture = self.pointer.capture(panel_id);
        debug!(panel = %panel_id, start_x = x, start_width, "drag started");
        self.drag = Some(DragState {
            panel: idx,
            start_x: x,
            start_width,
            _capture: capture,
        });
        Ok(())
    }

    /// Pointer-move to `x`. Returns the committed width, or `None` when no
    /// gesture is active or `x` is not a finite position.
    pub fn pointer_move(&mut self, x: f64) -> Option<f64> {
        let drag = self.drag.as_ref()?;
        if !x.is_finite() {
            debug!(x, "ignoring non-finite pointer position");
            return None;
        }
        let (idx, start_x, start_width) = (drag.panel, drag.start_x, drag.start_width);
        let delta = match self.panels[idx].position {
            PanelPosition::Right => start_x - x,
            PanelPosition::Left | PanelPosition::Center => x - start_x,
        };
        Some(self.commit(idx, start_width + delta))
    }

    /// Pointer-up anywhere. Returns the panel and its final width if a
    /// gesture was active.
    pub fn pointer_up(&mut self) -> Option<(String, f64)> {
        let drag = self.drag.take()?;
        let panel = &self.panels[drag.panel];
        let width = panel.width.unwrap_or(drag.start_width);
        debug!(panel = %panel.id, width, "drag ended");
        Some((panel.id.clone(), width))
    }

    /// Abandon any gesture, keeping the widths committed so far.
    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn dragging_panel(&self) -> Option<&str> {
        self.drag
            .as_ref()
            .map(|d| self.panels[d.panel].id.as_str())
    }
}
