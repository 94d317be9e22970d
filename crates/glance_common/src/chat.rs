//! Chat log core
//!
//! Append-only message list backing the assistant chat widget. The widget
//! owns scheduling of the delayed reply; this module only guarantees the
//! ordering invariants: messages are appended in insertion order and never
//! mutated or removed for the lifetime of the log.

use serde::{Deserialize, Serialize};

/// Greeting seeded into every fresh chat log
pub const GREETING: &str = "Hello! I'm your AI assistant. How can I help you today?";

/// Fixed reply appended after the simulated thinking delay
pub const CANNED_REPLY: &str = "I'm analyzing your request and will provide assistance shortly.";

/// A single chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    #[serde(rename = "isAI")]
    pub is_ai: bool,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_ai: false,
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_ai: true,
        }
    }
}

/// Ordered, append-only conversation log
#[derive(Debug, Clone)]
pub struct ChatLog {
    messages: Vec<Message>,
}

impl ChatLog {
    /// New log seeded with the assistant greeting
    pub fn new() -> Self {
        Self {
            messages: vec![Message::assistant(GREETING)],
        }
    }

    /// Append a user message. Trimmed-empty input is a silent no-op;
    /// returns whether a message was appended.
    pub fn push_user(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.messages.push(Message::user(trimmed));
        true
    }

    /// Append an assistant reply
    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.messages.push(Message::assistant(text));
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_log_is_seeded_with_greeting() {
        let log = ChatLog::new();
        assert_eq!(log.len(), 1);
        assert_eq!(log.messages()[0], Message::assistant(GREETING));
    }

    #[test]
    fn test_empty_send_is_a_noop() {
        let mut log = ChatLog::new();
        assert!(!log.push_user(""));
        assert!(!log.push_user("   "));
        assert!(!log.push_user("\t\n"));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_send_appends_one_user_message() {
        let mut log = ChatLog::new();
        assert!(log.push_user("hello"));
        assert_eq!(log.len(), 2);
        assert_eq!(log.messages()[1].text, "hello");
        assert!(!log.messages()[1].is_ai);
    }

    #[test]
    fn test_reply_appends_canned_text() {
        let mut log = ChatLog::new();
        log.push_user("hello");
        log.push_assistant(CANNED_REPLY);
        let last = log.messages().last().unwrap();
        assert!(last.is_ai);
        assert_eq!(last.text, CANNED_REPLY);
    }

    #[test]
    fn test_log_is_append_only() {
        let mut log = ChatLog::new();
        let mut snapshots = vec![log.messages().to_vec()];

        log.push_user("one");
        snapshots.push(log.messages().to_vec());
        log.push_assistant(CANNED_REPLY);
        snapshots.push(log.messages().to_vec());
        log.push_user("two");
        snapshots.push(log.messages().to_vec());

        // Every earlier snapshot is a prefix of every later one
        for (i, earlier) in snapshots.iter().enumerate() {
            for later in &snapshots[i..] {
                assert_eq!(&later[..earlier.len()], &earlier[..]);
            }
        }
    }

    #[test]
    fn test_message_json_shape() {
        let msg = Message::user("hi");
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(json, r#"{"text":"hi","isAI":false}"#);
    }
}
