//! Error types for the conversation exchanges.

use thiserror::Error;

/// Why a backend exchange produced no usable answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    /// No response was obtained: network failure, timeout, oversized body,
    /// or a body that is not the expected JSON.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The backend answered with `success: false`. Holds its `error` string,
    /// if it sent one.
    #[error("backend failure: {}", .0.as_deref().unwrap_or("no error message"))]
    Backend(Option<String>),
}

impl ChatError {
    /// The backend's own error string, for `{error}` templates.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ChatError::Backend(msg) => msg.as_deref(),
            ChatError::Transport(_) => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ChatError::Transport(_))
    }
}
