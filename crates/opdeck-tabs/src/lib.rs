//! Tab multiplexer for the Opdeck workspace.
//!
//! The [`TabRegistry`] owns every open view and the active pointer,
//! [`TabHost`] binds it to the event bus for the lifetime of a mount, and
//! [`TabPanelRenderer`] decides which tab's content is mounted.

pub mod empty_watch;
pub mod host;
pub mod registry;
pub mod renderer;
pub mod tab;

pub use empty_watch::EmptyWatch;
pub use host::TabHost;
pub use registry::TabRegistry;
pub use renderer::{ContentFactory, ContentView, TabPanelRenderer, TabSlot};
pub use tab::{Tab, TabContent, TabKind, TabPatch};
