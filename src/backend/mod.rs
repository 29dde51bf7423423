//! Backend collaborator: the request/response exchanges behind the widget.
//!
//! - [`ChatBackend`] — one method per exchange; inject any implementation
//!   into a `ConversationClient`
//! - [`HttpBackend`] — JSON over HTTP(S) against the configured endpoints
//! - [`wire`]        — request and reply bodies

mod http_backend;
pub mod wire;

pub use http_backend::HttpBackend;
pub use wire::{
    ActionStat, BackendStatus, ClearReply, HistoryReply, LlmStatus, NewSessionReply, SendReply,
    SendRequest, SessionInfo, SessionRecord, SessionStats, SessionSummary, SummaryReply, UserInfo,
    WireMessage,
};

use crate::error::ChatError;

/// The chat backend's exchanges.
///
/// Implementations return `Err(ChatError::Transport)` only when no reply was
/// obtained; a reply with `success: false` is returned as `Ok` and judged by
/// the caller.
pub trait ChatBackend: Send + Sync {
    /// Submit a user message and receive the assistant's reply.
    fn send_message(&self, message: &str) -> Result<SendReply, ChatError>;

    /// Fetch the persisted transcript of the active session.
    fn history(&self) -> Result<HistoryReply, ChatError>;

    /// Start a fresh session.
    fn new_session(&self) -> Result<NewSessionReply, ChatError>;

    /// Delete all messages of the active session.
    fn clear_history(&self) -> Result<ClearReply, ChatError>;

    /// Fetch statistics for the active session.
    fn session_summary(&self) -> Result<SummaryReply, ChatError>;

    /// Fetch backend and LLM status.
    fn status(&self) -> Result<BackendStatus, ChatError>;

    /// Fetch statistics across the user's recent sessions.
    fn session_stats(&self) -> Result<SessionStats, ChatError>;
}
