//! Conversation turns for a single chat session.
//!
//! A [`Conversation`] is an append-only, chronologically ordered sequence
//! of [`Turn`]s. It lives for the duration of one interactive session and
//! is discarded when the session ends -- nothing here is ever persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Re-export MessageRole -- a turn's role and an LLM message's role share
// the same vocabulary.
pub use crate::llm::MessageRole;

/// One role-tagged message in a conversation.
///
/// Immutable once appended: the struct is only ever handed out by
/// shared reference from [`Conversation::turns`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub role: MessageRole,
    pub text: String,
    /// Wall-clock time at creation.
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    /// Create a turn stamped with the current wall-clock time.
    pub fn now(role: MessageRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Append-only ordered sequence of turns.
///
/// Insertion order is chronological and meaningful. The API exposes no
/// way to remove or reorder turns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn. Turns are never removed or reordered afterwards.
    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Append a user turn stamped with the current time.
    pub fn push_user(&mut self, text: impl Into<String>) {
        self.push(Turn::now(MessageRole::User, text));
    }

    /// Append an assistant turn stamped with the current time.
    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.push(Turn::now(MessageRole::Assistant, text));
    }

    /// All turns in insertion order.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_insertion_order() {
        let mut conversation = Conversation::new();
        for i in 0..50 {
            conversation.push_user(format!("question {i}"));
            conversation.push_assistant(format!("answer {i}"));
        }

        assert_eq!(conversation.len(), 100);
        for (i, pair) in conversation.turns().chunks(2).enumerate() {
            assert_eq!(pair[0].role, MessageRole::User);
            assert_eq!(pair[0].text, format!("question {i}"));
            assert_eq!(pair[1].role, MessageRole::Assistant);
            assert_eq!(pair[1].text, format!("answer {i}"));
        }
    }

    #[test]
    fn test_timestamps_are_monotonic_nondecreasing() {
        let mut conversation = Conversation::new();
        conversation.push_user("first");
        conversation.push_assistant("second");

        let turns = conversation.turns();
        assert!(turns[0].timestamp <= turns[1].timestamp);
    }

    #[test]
    fn test_last_and_len() {
        let mut conversation = Conversation::new();
        assert!(conversation.is_empty());
        assert!(conversation.last().is_none());

        conversation.push_user("hello");
        assert_eq!(conversation.len(), 1);
        assert_eq!(conversation.last().unwrap().text, "hello");
    }

    #[test]
    fn test_turn_serde_roundtrip() {
        let turn = Turn::now(MessageRole::User, "How do I file an FIR?");
        let json = serde_json::to_string(&turn).unwrap();
        let parsed: Turn = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.role, MessageRole::User);
        assert_eq!(parsed.text, "How do I file an FIR?");
    }
}
