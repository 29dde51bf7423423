//! Core message types for the conversation transcript.

use serde::{Deserialize, Serialize};

use crate::backend::WireMessage;

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    #[serde(alias = "bot")]
    Assistant,
}

impl Role {
    /// Parse a wire role name. `bot` is accepted for the assistant; other
    /// roles (`system`, `tool`, ...) are not displayed and yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "user" => Some(Role::User),
            "assistant" | "bot" => Some(Role::Assistant),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A message in the transcript. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Convert a persisted entry, skipping roles the transcript does not hold.
    pub fn from_wire(entry: WireMessage) -> Option<Self> {
        match Role::parse(&entry.role) {
            Some(role) => Some(Self::new(role, entry.content)),
            None => {
                crate::debug_log!("CHAT", "Skipping history entry with role {:?}", entry.role);
                None
            }
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Snapshot of a backend-assigned session and its transcript.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Opaque identifier; `None` until the backend has assigned one.
    pub id: Option<String>,
    pub transcript: Vec<Message>,
}
