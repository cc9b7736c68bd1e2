//! Mutating registry operations: create, update, close, activate, reorder.

use opdeck_common::TabId;
use tracing::{debug, warn};

use super::TabRegistry;
use crate::tab::{truncate_title, Tab, TabContent, TabPatch};

impl TabRegistry {
    /// Open a tab and make it active.
    ///
    /// Session-bound chat content is deduplicated: if a tab already carries
    /// the same session id, that tab takes the new title and content and is
    /// activated instead, and its id is returned.
    pub fn create_tab(&mut self, title: impl Into<String>, content: TabContent) -> TabId {
        let title = truncate_title(&title.into(), self.max_title_len);

        let existing = content
            .session_id()
            .and_then(|sid| self.tabs.iter().position(|t| t.session_id() == Some(sid)));
        if let Some(idx) = existing {
            let tab = &mut self.tabs[idx];
            tab.title = title;
            tab.content.merge(content);
            let id = tab.id;
            self.active = Some(id);
            debug!(tab_id = %id, "reused session tab");
            return id;
        }

        let id = TabId(self.next_id);
        self.next_id += 1;
        debug!(tab_id = %id, kind = %content.kind(), "created tab");
        self.tabs.push(Tab { id, title, content });
        self.active = Some(id);
        id
    }

    /// Merge `patch` into an existing tab. Returns `false` if the tab does
    /// not exist, or if the patch would bind a session another tab holds.
    pub fn update_tab(&mut self, id: TabId, patch: TabPatch) -> bool {
        let Some(idx) = self.index_of(id) else {
            debug!(tab_id = %id, "update for unknown tab ignored");
            return false;
        };

        if let Some(session_id) = patch.content.as_ref().and_then(TabContent::session_id) {
            if let Some(other) = self.find_by_session_id(session_id) {
                if other.id != id {
                    warn!(
                        tab_id = %id,
                        holder = %other.id,
                        session = %session_id,
                        "session already open in another tab, update rejected"
                    );
                    return false;
                }
            }
        }

        let max_title_len = self.max_title_len;
        let tab = &mut self.tabs[idx];
        if let Some(title) = patch.title {
            tab.title = truncate_title(&title, max_title_len);
        }
        if let Some(content) = patch.content {
            tab.content.merge(content);
        }
        true
    }

    /// Remove a tab. If it was active, the tab to its left becomes active,
    /// else the one to its right, else nothing.
    pub fn close_tab(&mut self, id: TabId) -> bool {
        let Some(idx) = self.index_of(id) else {
            debug!(tab_id = %id, "close for unknown tab ignored");
            return false;
        };

        self.tabs.remove(idx);
        if self.active == Some(id) {
            self.active = if idx > 0 {
                Some(self.tabs[idx - 1].id)
            } else {
                self.tabs.first().map(|t| t.id)
            };
        }
        debug!(tab_id = %id, remaining = self.tabs.len(), "closed tab");
        true
    }

    /// Point the active pointer at `id`. Returns `true` if found.
    pub fn set_active(&mut self, id: TabId) -> bool {
        if self.contains(id) {
            self.active = Some(id);
            true
        } else {
            false
        }
    }

    /// Activate the next tab, wrapping around.
    pub fn activate_next(&mut self) -> Option<TabId> {
        self.cycle(1)
    }

    /// Activate the previous tab, wrapping around.
    pub fn activate_previous(&mut self) -> Option<TabId> {
        self.cycle(self.tabs.len().saturating_sub(1))
    }

    fn cycle(&mut self, step: usize) -> Option<TabId> {
        let len = self.tabs.len();
        if len == 0 {
            return None;
        }
        let current = self.active.and_then(|id| self.index_of(id)).unwrap_or(0);
        let id = self.tabs[(current + step) % len].id;
        self.active = Some(id);
        Some(id)
    }

    /// Move a tab to `to_index` (clamped to the strip). The active pointer
    /// is unchanged.
    pub fn move_tab(&mut self, id: TabId, to_index: usize) -> bool {
        let Some(from) = self.index_of(id) else {
            return false;
        };
        let tab = self.tabs.remove(from);
        let to = to_index.min(self.tabs.len());
        self.tabs.insert(to, tab);
        true
    }
}
