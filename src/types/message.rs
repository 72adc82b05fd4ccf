//! Chat message types.

use serde::{Deserialize, Serialize};

/// A message in a conversation. Construct one with [`Message::user`],
/// [`Message::assistant`] or [`Message::error`]; once appended to a
/// conversation it is never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
    /// Marks an assistant-role bubble that reports a failure instead of
    /// a real reply. Display-local: error messages are never persisted,
    /// so the flag stays off the wire.
    #[serde(skip)]
    pub is_error: bool,
}

impl Message {
    /// Create a user message.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: text.into(),
            is_error: false,
        }
    }

    /// Create an assistant message.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: text.into(),
            is_error: false,
        }
    }

    /// Create an assistant-role error bubble.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: text.into(),
            is_error: true,
        }
    }
}

/// Conversation role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}
