//! Responsive layout engine: visibility, viewport classification, and the
//! arrangement of visible panels for the current breakpoint.

mod types;


pub use types::*;

use opdeck_common::LayoutError;
use opdeck_config::schema::{BreakpointConfig, PanelPosition};
use opdeck_config::OpdeckConfig;
use tracing::{debug, info};

use crate::breakpoint::Breakpoint;
use crate::geometry::PanelGeometryStore;

struct PanelState {
    id: String,
    position: PanelPosition,
    visible: bool,
}

pub struct ResponsiveLayout {
    panels: Vec<PanelState>,
    main_panel: String,
    trailing_panel: Option<String>,
    column_template: Option<String>,
    breakpoints: BreakpointConfig,
    overlay_width_fraction: f64,
    tablet_trailing_width: f64,
    viewport_width: f64,
    breakpoint: Breakpoint,
    geometry: PanelGeometryStore,
}

impl ResponsiveLayout {
    /// Build the engine over `geometry`, which must describe the same
    /// panels as `config.layout`. Starts with a desktop-sized viewport.
    pub fn new(config: &OpdeckConfig, geometry: PanelGeometryStore) -> Result<Self, LayoutError> {
        let layout = &config.layout;
        if layout.panel(&layout.main_panel).is_none() {
            return Err(LayoutError::UnknownPanel(layout.main_panel.clone()));
        }
        for panel in &layout.panels {
            if geometry.bounds(&panel.id).is_none() {
                return Err(LayoutError::UnknownPanel(panel.id.clone()));
            }
        }

        let panels = layout
            .panels
            .iter()
            .map(|p| PanelState {
                id: p.id.clone(),
                position: p.position,
                visible: p.visible || p.id == layout.main_panel,
            })
            .collect();

        let trailing_panel = layout
            .trailing_panel
            .clone()
            .filter(|id| layout.panel(id).is_some());

        let viewport_width = config.breakpoints.tablet_max + 1.0;
        Ok(Self {
            panels,
            main_panel: layout.main_panel.clone(),
            trailing_panel,
            column_template: layout.column_template.clone(),
            breakpoints: config.breakpoints.clone(),
            overlay_width_fraction: config.mobile.overlay_width_fraction,
            tablet_trailing_width: config.tablet.trailing_width,
            viewport_width,
            breakpoint: Breakpoint::classify(viewport_width, &config.breakpoints),
            geometry,
        })
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Update the viewport. Entering mobile abandons any drag in progress.
    pub fn set_viewport_width(&mut self, width: f64) -> Breakpoint {
        self.viewport_width = width;
        let next = Breakpoint::classify(width, &self.breakpoints);
        if next != self.breakpoint {
            info!(from = %self.breakpoint, to = %next, width, "breakpoint changed");
            if !next.allows_resize() {
                self.geometry.end_drag();
            }
            self.breakpoint = next;
        }
        next
    }

    pub fn geometry(&self) -> &PanelGeometryStore {
        &self.geometry
    }

    pub fn geometry_mut(&mut self) -> &mut PanelGeometryStore {
        &mut self.geometry
    }

    // -- visibility --

    pub fn is_visible(&self, panel_id: &str) -> bool {
        self.state(panel_id).is_some_and(|p| p.visible)
    }

    /// Ids of visible panels in configuration order.
    pub fn visible_panels(&self) -> Vec<&str> {
        self.panels
            .iter()
            .filter(|p| p.visible)
            .map(|p| p.id.as_str())
            .collect()
    }

    /// Show a panel. Returns `true` if its visibility changed.
    pub fn show(&mut self, panel_id: &str) -> bool {
        self.set_visible(panel_id, true)
    }

    /// Hide a panel. The main panel cannot be hidden.
    pub fn hide(&mut self, panel_id: &str) -> bool {
        if panel_id == self.main_panel {
            return false;
        }
        if self.geometry.dragging_panel() == Some(panel_id) {
            self.geometry.end_drag();
        }
        self.set_visible(panel_id, false)
    }

    pub fn toggle(&mut self, panel_id: &str) -> bool {
        if self.is_visible(panel_id) {
            self.hide(panel_id)
        } else {
            self.show(panel_id)
        }
    }

    /// Backdrop tap on mobile: hide every overlay. Widths are untouched.
    /// Returns `true` if anything was hidden.
    pub fn dismiss_backdrop(&mut self) -> bool {
        if self.breakpoint != Breakpoint::Mobile {
            return false;
        }
        let mut hidden = false;
        for panel in &mut self.panels {
            if panel.visible && panel.id != self.main_panel {
                panel.visible = false;
                hidden = true;
            }
        }
        if hidden {
            debug!("backdrop dismissed");
        }
        hidden
    }

    // -- drag gesture, gated by breakpoint and visibility --

    /// Start a resize drag. Returns `Ok(false)` when resizing is not offered
    /// right now (mobile viewport or hidden panel).
    pub fn begin_drag(&mut self, panel_id: &str, x: f64) -> Result<bool, LayoutError> {
        if self.state(panel_id).is_none() {
            return Err(LayoutError::UnknownPanel(panel_id.to_string()));
        }
        if !self.breakpoint.allows_resize() || !self.is_visible(panel_id) {
            debug!(panel = %panel_id, breakpoint = %self.breakpoint, "resize not available");
            return Ok(false);
        }
        self.geometry.begin_drag(panel_id, x)?;
        Ok(true)
    }

    pub fn pointer_move(&mut self, x: f64) -> Option<f64> {
        self.geometry.pointer_move(x)
    }

    pub fn pointer_up(&mut self) -> Option<(String, f64)> {
        self.geometry.pointer_up()
    }

    // -- arrangement --

    pub fn arrange(&self) -> Arrangement {
        match self.breakpoint {
            Breakpoint::Mobile => self.arrange_mobile(),
            Breakpoint::Tablet => self.arrange_tablet(),
            Breakpoint::Desktop => self.arrange_desktop(),
        }
    }

    fn arrange_mobile(&self) -> Arrangement {
        let width = self.viewport_width * self.overlay_width_fraction;
        let overlays: Vec<Overlay> = self
            .panels
            .iter()
            .filter(|p| p.visible && p.id != self.main_panel)
            .map(|p| Overlay {
                id: p.id.clone(),
                edge: p.position,
                width,
            })
            .collect();
        Arrangement::Mobile {
            main: self.main_panel.clone(),
            backdrop: !overlays.is_empty(),
            overlays,
        }
    }

    fn arrange_tablet(&self) -> Arrangement {
        let trailing = self
            .trailing_panel
            .as_deref()
            .filter(|id| self.is_visible(id))
            .map(|id| TrailingColumn {
                id: id.to_string(),
                width: self.tablet_trailing_width,
            });

        let columns = self
            .ordered_visible()
            .filter(|p| trailing.as_ref().map_or(true, |t| t.id != p.id))
            .map(|p| self.column(p))
            .collect();

        Arrangement::Tablet {
            primary: GridRow::new(columns),
            trailing,
        }
    }

    fn arrange_desktop(&self) -> Arrangement {
        let columns = self.ordered_visible().map(|p| self.column(p)).collect();
        let mut row = GridRow::new(columns);
        if let Some(template) = &self.column_template {
            row.template = template.clone();
        }
        Arrangement::Desktop { row }
    }

    /// Visible panels ordered left, center, right. Ties keep configuration
    /// order.
    fn ordered_visible(&self) -> impl Iterator<Item = &PanelState> {
        let mut visible: Vec<&PanelState> = self.panels.iter().filter(|p| p.visible).collect();
        visible.sort_by_key(|p| p.position.order());
        visible.into_iter()
    }

    fn column(&self, panel: &PanelState) -> Column {
        let width = if panel.id == self.main_panel {
            None
        } else {
            self.geometry.width(&panel.id)
        };
        Column {
            id: panel.id.clone(),
            width,
            resizable: width.is_some() && self.geometry.is_resizable(&panel.id),
        }
    }

    fn state(&self, panel_id: &str) -> Option<&PanelState> {
        self.panels.iter().find(|p| p.id == panel_id)
    }

    fn set_visible(&mut self, panel_id: &str, visible: bool) -> bool {
        match self.panels.iter_mut().find(|p| p.id == panel_id) {
            Some(panel) if panel.visible != visible => {
                panel.visible = visible;
                debug!(panel = %panel_id, visible, "panel visibility changed");
                true
            }
            _ => false,
        }
    }
}
