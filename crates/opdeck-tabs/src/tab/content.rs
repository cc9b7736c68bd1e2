//! Kind-tagged tab content. Each variant carries only the fields its view
//! needs, so a kind change can never leave stale payload behind.

use std::fmt;

use opdeck_common::{AgentInfo, ClaudeFile, SessionId, SessionInfo};
use serde::{Deserialize, Serialize};

/// The closed set of view kinds a tab can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TabKind {
    Projects,
    Chat,
    Agent,
    Usage,
    Mcp,
    Settings,
    ClaudeMd,
    ClaudeFile,
    AgentExecution,
    CreateAgent,
    ImportAgent,
    /// A kind this build does not know, e.g. from a newer saved layout.
    Unknown,
}

impl TabKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TabKind::Projects => "projects",
            TabKind::Chat => "chat",
            TabKind::Agent => "agent",
            TabKind::Usage => "usage",
            TabKind::Mcp => "mcp",
            TabKind::Settings => "settings",
            TabKind::ClaudeMd => "claude-md",
            TabKind::ClaudeFile => "claude-file",
            TabKind::AgentExecution => "agent-execution",
            TabKind::CreateAgent => "create-agent",
            TabKind::ImportAgent => "import-agent",
            TabKind::Unknown => "unknown",
        }
    }
}

impl TabKind {
    /// Title for a freshly opened tab of this kind.
    pub fn default_title(self) -> &'static str {
        match self {
            TabKind::Projects => "Projects",
            TabKind::Chat => "New Chat",
            TabKind::Agent => "Agent",
            TabKind::Usage => "Usage",
            TabKind::Mcp => "MCP",
            TabKind::Settings => "Settings",
            TabKind::ClaudeMd => "CLAUDE.md",
            TabKind::ClaudeFile => "File",
            TabKind::AgentExecution => "Agent Run",
            TabKind::CreateAgent => "Create Agent",
            TabKind::ImportAgent => "Import Agent",
            TabKind::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for TabKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum TabContent {
    Projects,
    Chat {
        #[serde(default)]
        session_id: Option<SessionId>,
        #[serde(default)]
        session: Option<SessionInfo>,
        #[serde(default)]
        project_path: Option<String>,
    },
    Agent {
        #[serde(default)]
        run_id: Option<i64>,
    },
    Usage,
    Mcp,
    Settings,
    ClaudeMd,
    ClaudeFile {
        #[serde(default)]
        file: Option<ClaudeFile>,
    },
    AgentExecution {
        #[serde(default)]
        agent: Option<AgentInfo>,
    },
    CreateAgent,
    ImportAgent,
    #[serde(other)]
    Unknown,
}

impl TabContent {
    /// An empty chat bound to `session_id`.
    pub fn chat(session_id: SessionId) -> Self {
        TabContent::Chat {
            session_id: Some(session_id),
            session: None,
            project_path: None,
        }
    }

    /// A chat bound to a full session record.
    pub fn session(session: SessionInfo) -> Self {
        TabContent::Chat {
            session_id: Some(session.id.clone()),
            project_path: Some(session.project_path.clone()),
            session: Some(session),
        }
    }

    /// Content of the given kind with no payload.
    pub fn blank(kind: TabKind) -> Self {
        match kind {
            TabKind::Projects => TabContent::Projects,
            TabKind::Chat => TabContent::Chat {
                session_id: None,
                session: None,
                project_path: None,
            },
            TabKind::Agent => TabContent::Agent { run_id: None },
            TabKind::Usage => TabContent::Usage,
            TabKind::Mcp => TabContent::Mcp,
            TabKind::Settings => TabContent::Settings,
            TabKind::ClaudeMd => TabContent::ClaudeMd,
            TabKind::ClaudeFile => TabContent::ClaudeFile { file: None },
            TabKind::AgentExecution => TabContent::AgentExecution { agent: None },
            TabKind::CreateAgent => TabContent::CreateAgent,
            TabKind::ImportAgent => TabContent::ImportAgent,
            TabKind::Unknown => TabContent::Unknown,
        }
    }

    pub fn kind(&self) -> TabKind {
        match self {
            TabContent::Projects => TabKind::Projects,
            TabContent::Chat { .. } => TabKind::Chat,
            TabContent::Agent { .. } => TabKind::Agent,
            TabContent::Usage => TabKind::Usage,
            TabContent::Mcp => TabKind::Mcp,
            TabContent::Settings => TabKind::Settings,
            TabContent::ClaudeMd => TabKind::ClaudeMd,
            TabContent::ClaudeFile { .. } => TabKind::ClaudeFile,
            TabContent::AgentExecution { .. } => TabKind::AgentExecution,
            TabContent::CreateAgent => TabKind::CreateAgent,
            TabContent::ImportAgent => TabKind::ImportAgent,
            TabContent::Unknown => TabKind::Unknown,
        }
    }

    pub fn session_id(&self) -> Option<&SessionId> {
        match self {
            TabContent::Chat { session_id, .. } => session_id.as_ref(),
            _ => None,
        }
    }

    /// Absolute path of the file shown by a `claude-file` tab.
    pub fn file_id(&self) -> Option<&str> {
        match self {
            TabContent::ClaudeFile { file: Some(file) } => Some(file.id()),
            _ => None,
        }
    }

    /// Apply `patch` on top of this content.
    ///
    /// Same kind: every field the patch sets overrides, unset fields keep
    /// their value. Different kind: the patch replaces the content outright.
    pub fn merge(&mut self, patch: TabContent) {
        match (self, patch) {
            (
                TabContent::Chat {
                    session_id,
                    session,
                    project_path,
                },
                TabContent::Chat {
                    session_id: new_id,
                    session: new_session,
                    project_path: new_path,
                },
            ) => {
                if new_id.is_some() {
                    *session_id = new_id;
                }
                if new_session.is_some() {
                    *session = new_session;
                }
                if new_path.is_some() {
                    *project_path = new_path;
                }
            }
            (TabContent::Agent { run_id }, TabContent::Agent { run_id: new }) => {
                if new.is_some() {
                    *run_id = new;
                }
            }
            (TabContent::ClaudeFile { file }, TabContent::ClaudeFile { file: new }) => {
                if new.is_some() {
                    *file = new;
                }
            }
            (TabContent::AgentExecution { agent }, TabContent::AgentExecution { agent: new }) => {
                if new.is_some() {
                    *agent = new;
                }
            }
            (this, patch) => *this = patch,
        }
    }
}
