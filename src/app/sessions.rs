use std::collections::HashMap;

use crate::core::tally::Tally;

/// Per-session shopping lists for multi-tenant front ends, one tally per
/// chat or user. The session id is opaque: the transport supplies it and
/// nothing here interprets it.
#[derive(Debug, Default)]
pub struct SessionStore {
    lists: HashMap<String, Tally>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally for the session, created empty on first use.
    pub fn tally_mut(&mut self, session_id: &str) -> &mut Tally {
        self.lists.entry(session_id.to_string()).or_default()
    }

    pub fn get(&self, session_id: &str) -> Option<&Tally> {
        self.lists.get(session_id)
    }

    /// Empties the session's list. Returns false when the session had no
    /// list yet, so front ends can answer "was empty already".
    pub fn empty(&mut self, session_id: &str) -> bool {
        match self.lists.get_mut(session_id) {
            Some(tally) => {
                tally.reset();
                true
            }
            None => false,
        }
    }

    /// Ends the session, dropping its tally.
    pub fn remove(&mut self, session_id: &str) {
        self.lists.remove(session_id);
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sessions_are_isolated() {
        let mut store = SessionStore::new();
        store.tally_mut("chat-1").add("Milk");
        store.tally_mut("chat-1").add("Milk");
        store.tally_mut("chat-2").add("Bread");

        assert_eq!(store.get("chat-1").unwrap().count("Milk"), 2);
        assert_eq!(store.get("chat-1").unwrap().count("Bread"), 0);
        assert_eq!(store.get("chat-2").unwrap().count("Bread"), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_empty_reports_whether_session_existed() {
        let mut store = SessionStore::new();
        assert!(!store.empty("chat-1"));

        store.tally_mut("chat-1").add("Milk");
        assert!(store.empty("chat-1"));
        assert!(store.get("chat-1").unwrap().is_empty());
    }

    #[test]
    fn test_remove_ends_session() {
        let mut store = SessionStore::new();
        store.tally_mut("chat-1").add("Milk");
        store.remove("chat-1");

        assert!(store.get("chat-1").is_none());
        assert!(store.is_empty());
    }
}
