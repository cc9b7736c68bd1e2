//! Headless stand-in for tab content: each mount is a text label.

use opdeck_common::TabId;
use opdeck_tabs::{ContentFactory, ContentView};

#[derive(Debug, Default)]
pub struct HeadlessContent {
    mounts: usize,
}

impl HeadlessContent {
    /// Number of mounts so far.
    pub fn mounts(&self) -> usize {
        self.mounts
    }
}

pub fn label(view: &ContentView<'_>) -> String {
    match view {
        ContentView::Projects => "projects".into(),
        ContentView::Chat { session_id, .. } => match session_id {
            Some(id) => format!("chat:{id}"),
            None => "chat:new".into(),
        },
        ContentView::Agent { run_id } => format!("agent-run:{run_id}"),
        ContentView::Usage => "usage".into(),
        ContentView::Mcp => "mcp".into(),
        ContentView::Settings => "settings".into(),
        ContentView::ClaudeMd => "claude-md".into(),
        ContentView::ClaudeFile(file) => format!("claude-file:{}", file.id()),
        ContentView::AgentExecution(agent) => format!("agent-execution:{}", agent.name),
        ContentView::CreateAgent => "create-agent".into(),
        ContentView::ImportAgent => "import-agent".into(),
        ContentView::Placeholder { message, .. } => format!("placeholder:{message}"),
    }
}

impl ContentFactory for HeadlessContent {
    type Handle = String;

    fn mount(&mut self, tab_id: TabId, view: ContentView<'_>) -> String {
        self.mounts += 1;
        let label = label(&view);
        tracing::debug!(tab_id = %tab_id, content = %label, "content mounted");
        label
    }

    fn update(&mut self, handle: &mut String, view: ContentView<'_>) {
        *handle = label(&view);
    }
}
