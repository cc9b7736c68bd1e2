//! Core registry state and read-only queries.

use opdeck_common::{SessionId, TabId};

use crate::tab::{Tab, TabKind};

pub(crate) const DEFAULT_MAX_TITLE_LEN: usize = 40;

/// Sole owner of the open tabs. Every mutation goes through its operations,
/// which keep the active pointer either `None` or naming a live tab.
#[derive(Debug, Clone)]
pub struct TabRegistry {
    pub(super) tabs: Vec<Tab>,
    pub(super) active: Option<TabId>,
    pub(super) next_id: u64,
    pub(super) max_title_len: usize,
}

impl Default for TabRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TabRegistry {
    pub fn new() -> Self {
        Self::with_max_title_len(DEFAULT_MAX_TITLE_LEN)
    }

    /// Registry that truncates titles longer than `max_title_len` characters.
    pub fn with_max_title_len(max_title_len: usize) -> Self {
        Self {
            tabs: Vec::new(),
            active: None,
            next_id: 1,
            max_title_len,
        }
    }

    /// Tabs in strip order.
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn get(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: TabId) -> bool {
        self.get(id).is_some()
    }

    pub fn active(&self) -> Option<TabId> {
        self.active
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.active.and_then(|id| self.get(id))
    }

    /// The tab bound to `session_id`. At most one exists.
    pub fn find_by_session_id(&self, session_id: &SessionId) -> Option<&Tab> {
        self.tabs
            .iter()
            .find(|t| t.session_id() == Some(session_id))
    }

    /// First tab of the given kind, in strip order.
    pub fn find_by_kind(&self, kind: TabKind) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.kind() == kind)
    }

    /// The `claude-file` tab showing the file with this id.
    pub fn find_by_file_id(&self, file_id: &str) -> Option<&Tab> {
        self.tabs
            .iter()
            .find(|t| t.content.file_id() == Some(file_id))
    }

    pub(super) fn index_of(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }
}
