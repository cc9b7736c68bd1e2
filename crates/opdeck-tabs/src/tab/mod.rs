//! The tab entity: an id, a title, and kind-specific content.

mod content;

pub use content::*;

use opdeck_common::{SessionId, TabId};
use serde::{Deserialize, Serialize};

/// One open workspace view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    pub id: TabId,
    pub title: String,
    pub content: TabContent,
}

impl Tab {
    pub fn kind(&self) -> TabKind {
        self.content.kind()
    }

    /// The session this tab is bound to, if any.
    pub fn session_id(&self) -> Option<&SessionId> {
        self.content.session_id()
    }
}

/// Partial update applied by [`crate::TabRegistry::update_tab`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabPatch {
    pub title: Option<String>,
    pub content: Option<TabContent>,
}

impl TabPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: None,
        }
    }

    pub fn content(content: TabContent) -> Self {
        Self {
            title: None,
            content: Some(content),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Shorten `title` to at most `max_len` characters, ending in an ellipsis
/// when anything was cut.
pub fn truncate_title(title: &str, max_len: usize) -> String {
    if max_len == 0 || title.chars().count() <= max_len {
        return title.to_string();
    }
    let mut out: String = title.chars().take(max_len.saturating_sub(1)).collect();
    out.push('…');
    out
}
