//! In-memory conversation checkpointing
//!
//! Keeps the latest state snapshot per thread id for the lifetime of the
//! process. Nothing is persisted to disk.

use crate::chat::ChatState;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory checkpointer keyed by thread id
#[derive(Clone, Default)]
pub struct MemorySaver {
    inner: Arc<Mutex<HashMap<String, ChatState>>>,
}

impl MemorySaver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the latest snapshot for a thread, replacing any previous one
    pub fn save(&self, thread_id: &str, state: &ChatState) {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(thread_id.to_string(), state.clone());
    }

    /// Load the latest snapshot for a thread
    pub fn load(&self, thread_id: &str) -> Option<ChatState> {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(thread_id)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::ChatMessage;

    #[test]
    fn save_then_load_round_trips() {
        let saver = MemorySaver::new();
        let mut state = ChatState::new();
        state.push(ChatMessage::user("hello"));

        saver.save("1", &state);
        let loaded = saver.load("1").unwrap();
        assert_eq!(loaded.len(), 1);
    }

    #[test]
    fn threads_are_isolated() {
        let saver = MemorySaver::new();
        let mut a = ChatState::new();
        a.push(ChatMessage::user("thread a"));
        saver.save("a", &a);

        assert!(saver.load("b").is_none());
    }

    #[test]
    fn save_replaces_previous_snapshot() {
        let saver = MemorySaver::new();
        let mut state = ChatState::new();
        state.push(ChatMessage::user("one"));
        saver.save("1", &state);

        state.push(ChatMessage::assistant("two"));
        saver.save("1", &state);

        assert_eq!(saver.load("1").unwrap().len(), 2);
    }
}
