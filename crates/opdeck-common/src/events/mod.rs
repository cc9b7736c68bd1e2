//! Cross-component workspace events and the bus that carries them.

mod bus;

pub use bus::{EventBus, Subscription};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::id::TabId;
use crate::payloads::{AgentInfo, ClaudeFile, SessionInfo};

/// Every `type` tag the workspace understands.
const WIRE_NAMES: [&str; 10] = [
    "open-session-in-tab",
    "claude-session-selected",
    "open-claude-file",
    "open-agent-execution",
    "open-create-agent-tab",
    "open-import-agent-tab",
    "close-tab",
    "switch-to-welcome",
    "switch-to-tab",
    "unknown",
];

/// A named workspace action. Serializes as `{"type": "...", "data": {...}}`
/// using the kebab-case names content components publish. Any other `type`,
/// whatever its `data`, deserializes to [`Event::Unknown`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self", tag = "type", content = "data", rename_all = "kebab-case")]
pub enum Event {
    // -- inbound --
    OpenSessionInTab {
        session: SessionInfo,
    },
    #[serde(rename = "claude-session-selected")]
    SessionSelected {
        session: SessionInfo,
    },
    OpenClaudeFile {
        file: ClaudeFile,
    },
    OpenAgentExecution {
        agent: AgentInfo,
        #[serde(rename = "tabId", default)]
        tab_id: Option<TabId>,
    },
    OpenCreateAgentTab,
    OpenImportAgentTab,
    CloseTab {
        #[serde(rename = "tabId")]
        tab_id: TabId,
    },

    // -- outbound --
    SwitchToWelcome,
    SwitchToTab {
        #[serde(rename = "tabId")]
        tab_id: TabId,
    },

    Unknown,
}

impl Serialize for Event {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Event::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Event {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value.get("type").and_then(serde_json::Value::as_str) {
            Some(tag) if !WIRE_NAMES.contains(&tag) => Ok(Event::Unknown),
            _ => Event::deserialize(value).map_err(D::Error::custom),
        }
    }
}

impl Event {
    /// The wire name of this event.
    pub fn name(&self) -> &'static str {
        match self {
            Event::OpenSessionInTab { .. } => "open-session-in-tab",
            Event::SessionSelected { .. } => "claude-session-selected",
            Event::OpenClaudeFile { .. } => "open-claude-file",
            Event::OpenAgentExecution { .. } => "open-agent-execution",
            Event::OpenCreateAgentTab => "open-create-agent-tab",
            Event::OpenImportAgentTab => "open-import-agent-tab",
            Event::CloseTab { .. } => "close-tab",
            Event::SwitchToWelcome => "switch-to-welcome",
            Event::SwitchToTab { .. } => "switch-to-tab",
            Event::Unknown => "unknown",
        }
    }

    /// Whether the workspace itself emits this event.
    pub fn is_outbound(&self) -> bool {
        matches!(self, Event::SwitchToWelcome | Event::SwitchToTab { .. })
    }
}
