//! Mount gating and content dispatch for the tab area.
//!
//! Every tab keeps a slot in the strip, but only the active tab has its
//! content mounted. Switching tabs unmounts the previous content. Content
//! is produced by an external [`ContentFactory`] from a [`ContentView`], a
//! pure mapping of the tab's kind and payload.

use opdeck_common::{AgentInfo, ClaudeFile, SessionId, SessionInfo, TabId};
use tracing::{debug, warn};

use crate::registry::TabRegistry;
use crate::tab::{Tab, TabContent, TabKind};

/// What a tab's content area should show.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentView<'a> {
    Projects,
    Chat {
        session_id: Option<&'a SessionId>,
        session: Option<&'a SessionInfo>,
        project_path: Option<&'a str>,
    },
    Agent {
        run_id: i64,
    },
    Usage,
    Mcp,
    Settings,
    ClaudeMd,
    ClaudeFile(&'a ClaudeFile),
    AgentExecution(&'a AgentInfo),
    CreateAgent,
    ImportAgent,
    /// Labeled stand-in for a tab that cannot render.
    Placeholder {
        kind: TabKind,
        message: &'static str,
    },
}

impl<'a> ContentView<'a> {
    /// Map a tab to its view. Payload-bound kinds without their payload
    /// degrade to a placeholder.
    pub fn for_tab(tab: &'a Tab) -> Self {
        match &tab.content {
            TabContent::Projects => ContentView::Projects,
            TabContent::Chat {
                session_id,
                session,
                project_path,
            } => ContentView::Chat {
                session_id: session_id.as_ref(),
                session: session.as_ref(),
                project_path: project_path.as_deref(),
            },
            TabContent::Agent { run_id: Some(run_id) } => ContentView::Agent { run_id: *run_id },
            TabContent::Agent { run_id: None } => ContentView::Placeholder {
                kind: TabKind::Agent,
                message: "No agent run ID specified",
            },
            TabContent::Usage => ContentView::Usage,
            TabContent::Mcp => ContentView::Mcp,
            TabContent::Settings => ContentView::Settings,
            TabContent::ClaudeMd => ContentView::ClaudeMd,
            TabContent::ClaudeFile { file: Some(file) } => ContentView::ClaudeFile(file),
            TabContent::ClaudeFile { file: None } => ContentView::Placeholder {
                kind: TabKind::ClaudeFile,
                message: "No Claude file specified",
            },
            TabContent::AgentExecution { agent: Some(agent) } => {
                ContentView::AgentExecution(agent)
            }
            TabContent::AgentExecution { agent: None } => ContentView::Placeholder {
                kind: TabKind::AgentExecution,
                message: "No agent data specified",
            },
            TabContent::CreateAgent => ContentView::CreateAgent,
            TabContent::ImportAgent => ContentView::ImportAgent,
            TabContent::Unknown => ContentView::Placeholder {
                kind: TabKind::Unknown,
                message: "Unknown tab type",
            },
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, ContentView::Placeholder { .. })
    }
}

/// Builds mountable content for the active tab.
pub trait ContentFactory {
    type Handle;

    fn mount(&mut self, tab_id: TabId, view: ContentView<'_>) -> Self::Handle;

    /// Called when the mounted tab's payload changed without changing kind.
    fn update(&mut self, _handle: &mut Self::Handle, _view: ContentView<'_>) {}

    fn unmount(&mut self, handle: Self::Handle) {
        drop(handle);
    }
}

/// One entry of the tab area. `content` is only set for the active tab.
#[derive(Debug)]
pub struct TabSlot<'a, H> {
    pub tab_id: TabId,
    pub title: &'a str,
    pub kind: TabKind,
    pub active: bool,
    pub content: Option<&'a H>,
}

struct Mounted<H> {
    tab_id: TabId,
    kind: TabKind,
    content: TabContent,
    handle: H,
}

pub struct TabPanelRenderer<F: ContentFactory> {
    factory: F,
    mounted: Option<Mounted<F::Handle>>,
}

impl<F: ContentFactory> TabPanelRenderer<F> {
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            mounted: None,
        }
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn mounted_tab(&self) -> Option<TabId> {
        self.mounted.as_ref().map(|m| m.tab_id)
    }

    /// Bring mounted content in line with the registry and return the slots.
    pub fn render<'a>(&'a mut self, registry: &'a TabRegistry) -> Vec<TabSlot<'a, F::Handle>> {
        self.sync(registry.active_tab());

        let mounted = self.mounted.as_ref();
        registry
            .tabs()
            .iter()
            .map(|tab| {
                let active = registry.active() == Some(tab.id);
                TabSlot {
                    tab_id: tab.id,
                    title: &tab.title,
                    kind: tab.kind(),
                    active,
                    content: mounted
                        .filter(|m| active && m.tab_id == tab.id)
                        .map(|m| &m.handle),
                }
            })
            .collect()
    }

    /// Unmount whatever is mounted, e.g. when the tab area itself goes away.
    pub fn clear(&mut self) {
        if let Some(old) = self.mounted.take() {
            debug!(tab_id = %old.tab_id, "unmounting tab content");
            self.factory.unmount(old.handle);
        }
    }

    fn sync(&mut self, active: Option<&Tab>) {
        let Some(tab) = active else {
            self.clear();
            return;
        };

        if let Some(current) = self.mounted.as_mut() {
            if current.tab_id == tab.id && current.kind == tab.kind() {
                if current.content != tab.content {
                    self.factory.update(&mut current.handle, ContentView::for_tab(tab));
                    current.content = tab.content.clone();
                }
                return;
            }
        }

        self.clear();
        let view = ContentView::for_tab(tab);
        if view.is_placeholder() {
            warn!(tab_id = %tab.id, kind = %tab.kind(), "tab is missing its payload, showing placeholder");
        }
        debug!(tab_id = %tab.id, kind = %tab.kind(), "mounting tab content");
        let handle = self.factory.mount(tab.id, view);
        self.mounted = Some(Mounted {
            tab_id: tab.id,
            kind: tab.kind(),
            content: tab.content.clone(),
            handle,
        });
    }
}

impl<F: ContentFactory> Drop for TabPanelRenderer<F> {
    fn drop(&mut self) {
        self.clear();
    }
}
