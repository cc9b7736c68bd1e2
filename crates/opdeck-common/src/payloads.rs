//! Domain payloads carried by workspace events and tab content.
//!
//! The workspace never interprets these beyond identity and a display
//! label; the content behind each tab owns the rest.

use serde::{Deserialize, Serialize};

use crate::id::SessionId;

/// A chat session as reported by the session backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub id: SessionId,
    pub project_id: String,
    pub project_path: String,
    #[serde(default)]
    pub todo_data: Option<serde_json::Value>,
    #[serde(default)]
    pub created_at: u64,
    #[serde(default)]
    pub first_message: Option<String>,
    #[serde(default)]
    pub message_timestamp: Option<String>,
}

impl SessionInfo {
    /// Label for a tab showing this session: the project directory name,
    /// or the short session id when the path has no usable component.
    pub fn display_title(&self) -> String {
        self.project_path
            .trim_end_matches(['/', '\\'])
            .rsplit(['/', '\\'])
            .next()
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| self.id.short().to_string())
    }
}

/// A CLAUDE.md style memory file discovered in a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaudeFile {
    pub relative_path: String,
    pub absolute_path: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub modified: u64,
}

impl ClaudeFile {
    /// Files are keyed by their absolute path.
    pub fn id(&self) -> &str {
        &self.absolute_path
    }

    pub fn file_name(&self) -> &str {
        self.relative_path
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(&self.relative_path)
    }
}

/// An agent definition handed to an execution tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentInfo {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub default_task: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(path: &str) -> SessionInfo {
        SessionInfo {
            id: SessionId::from("1234567890abcdef"),
            project_id: "-home-dev-demo".into(),
            project_path: path.into(),
            todo_data: None,
            created_at: 0,
            first_message: None,
            message_timestamp: None,
        }
    }

    #[test]
    fn session_title_uses_last_path_component() {
        assert_eq!(session("/home/dev/demo").display_title(), "demo");
        assert_eq!(session("/home/dev/demo/").display_title(), "demo");
        assert_eq!(session("C:\\work\\api").display_title(), "api");
    }

    #[test]
    fn session_title_falls_back_to_short_id() {
        assert_eq!(session("").display_title(), "12345678");
        assert_eq!(session("/").display_title(), "12345678");
    }

    #[test]
    fn session_deserializes_with_missing_optionals() {
        let json = r#"{"id":"S1","project_id":"p","project_path":"/tmp/p"}"#;
        let s: SessionInfo = serde_json::from_str(json).unwrap();
        assert_eq!(s.id.as_str(), "S1");
        assert!(s.first_message.is_none());
        assert_eq!(s.created_at, 0);
    }

    #[test]
    fn claude_file_identity_and_name() {
        let file = ClaudeFile {
            relative_path: "docs/CLAUDE.md".into(),
            absolute_path: "/home/dev/demo/docs/CLAUDE.md".into(),
            size: 120,
            modified: 0,
        };
        assert_eq!(file.id(), "/home/dev/demo/docs/CLAUDE.md");
        assert_eq!(file.file_name(), "CLAUDE.md");
    }

    #[test]
    fn agent_deserializes_minimal() {
        let agent: AgentInfo = serde_json::from_str(r#"{"name":"reviewer"}"#).unwrap();
        assert_eq!(agent.name, "reviewer");
        assert!(agent.id.is_none());
        assert!(agent.icon.is_empty());
    }
}
