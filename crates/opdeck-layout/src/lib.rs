//! Responsive panel layout for the Opdeck workspace.
//!
//! Provides:
//! - Breakpoint classification of the viewport
//! - A geometry store holding clamped panel widths and the drag-resize gesture
//! - The responsive arrangement (mobile overlays, tablet grid, desktop row)
//! - JSON persistence of panel widths between runs

pub mod breakpoint;
pub mod geometry;
pub mod persist;
pub mod responsive;

pub use breakpoint::Breakpoint;
pub use geometry::{NullSink, PanelGeometryStore, PointerCapture, PointerHost, WidthSink};
pub use persist::PanelWidthFile;
pub use responsive::{Arrangement, Column, GridRow, Overlay, ResponsiveLayout, TrailingColumn};
