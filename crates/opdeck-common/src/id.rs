use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of an open tab. Allocated by the tab registry and never reused
/// for the registry's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(pub u64);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tab-{}", self.0)
    }
}

/// Identity of an external chat session. Opaque to the workspace core.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First eight characters, used as a fallback tab title.
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(8) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_id_display() {
        assert_eq!(TabId(3).to_string(), "tab-3");
    }

    #[test]
    fn tab_id_serializes_as_number() {
        let json = serde_json::to_string(&TabId(7)).unwrap();
        assert_eq!(json, "7");
        let back: TabId = serde_json::from_str("7").unwrap();
        assert_eq!(back, TabId(7));
    }

    #[test]
    fn session_id_short() {
        let sid = SessionId::new("0f3c2a9e-1111-2222-3333-444455556666");
        assert_eq!(sid.short(), "0f3c2a9e");
        assert_eq!(SessionId::from("abc").short(), "abc");
    }

    #[test]
    fn session_id_serializes_as_string() {
        let sid = SessionId::from("S1");
        assert_eq!(serde_json::to_string(&sid).unwrap(), "\"S1\"");
    }

    #[test]
    fn session_id_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(SessionId::from("a"));
        set.insert(SessionId::from("a"));
        set.insert(SessionId::from("b"));
        assert_eq!(set.len(), 2);
    }
}
