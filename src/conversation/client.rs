//! `ConversationClient` — session id, transcript, and the sequencing of
//! backend exchanges.
//!
//! Locking:
//! - `state` guards `{session_id, transcript, pending}` and is never held
//!   across a backend round trip.
//! - `exchange` serializes round trips. It is always taken before `state`.
//!   A second `send_message` while one is pending is rejected rather than
//!   queued; every other operation waits for the running exchange.

use std::sync::Arc;

use parking_lot::Mutex;

use par_chat_config::{ChatConfig, ConfigError, UiText};

use super::confirm::Confirm;
use super::types::{Message, Session};
use crate::backend::{BackendStatus, ChatBackend, HttpBackend, SessionStats, SessionSummary};
use crate::error::ChatError;

/// Result of [`ConversationClient::send_message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Empty/whitespace-only text, or a send was already pending. Nothing
    /// changed.
    Ignored,
    /// The assistant's reply was appended.
    Replied,
    /// An assistant error notice was appended instead of a reply.
    Failed(ChatError),
}

/// Result of a confirmed destructive action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Completed,
    /// The user declined; no request was made.
    Declined,
}

#[derive(Debug, Default)]
struct ConversationState {
    session_id: Option<String>,
    transcript: Vec<Message>,
    pending: bool,
}

/// Clears `pending` when a send ends, whether it returns or unwinds.
///
/// While `unwind_notice` is set, an unwinding exchange appends it as the
/// assistant turn so the user turn is not left without an answer.
struct PendingGuard<'a> {
    state: &'a Mutex<ConversationState>,
    unwind_notice: Option<String>,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.state.lock();
        if std::thread::panicking()
            && let Some(notice) = self.unwind_notice.take()
        {
            crate::debug_error!("CHAT", "Send aborted by a panic in the backend");
            state.transcript.push(Message::assistant(notice));
        }
        state.pending = false;
    }
}

/// One conversation with the chat backend.
pub struct ConversationClient {
    backend: Arc<dyn ChatBackend>,
    text: UiText,
    state: Mutex<ConversationState>,
    exchange: Mutex<()>,
}

impl ConversationClient {
    /// Create a client with no session and an empty transcript.
    pub fn new(backend: Arc<dyn ChatBackend>, text: UiText) -> Self {
        Self {
            backend,
            text,
            state: Mutex::new(ConversationState::default()),
            exchange: Mutex::new(()),
        }
    }

    /// Create a client talking to the HTTP backend described by `config`.
    pub fn from_config(config: &ChatConfig) -> Result<Self, ConfigError> {
        let backend = HttpBackend::new(config.backend.clone())?;
        Ok(Self::new(Arc::new(backend), config.text.clone()))
    }

    /// User-facing strings this client appends.
    pub fn text(&self) -> &UiText {
        &self.text
    }

    pub fn session_id(&self) -> Option<String> {
        self.state.lock().session_id.clone()
    }

    /// Copy of the transcript, oldest first.
    pub fn transcript(&self) -> Vec<Message> {
        self.state.lock().transcript.clone()
    }

    pub fn transcript_len(&self) -> usize {
        self.state.lock().transcript.len()
    }

    /// Snapshot of the session id and transcript taken under one lock.
    pub fn session(&self) -> Session {
        let state = self.state.lock();
        Session {
            id: state.session_id.clone(),
            transcript: state.transcript.clone(),
        }
    }

    /// Whether a `send_message` exchange is in flight.
    pub fn is_pending(&self) -> bool {
        self.state.lock().pending
    }

    /// Append an assistant-role note (e.g. a formatted summary) to the
    /// transcript.
    pub fn append_assistant_message(&self, content: impl Into<String>) {
        self.state.lock().transcript.push(Message::assistant(content));
    }

    /// Send `text` and append the reply, or an error notice, to the
    /// transcript.
    ///
    /// The text is trimmed. Empty text and calls made while another send is
    /// pending are ignored. Otherwise the user message is appended before the
    /// request goes out, and exactly one assistant message follows it.
    pub fn send_message(&self, text: &str) -> SendOutcome {
        let message = text.trim();
        if message.is_empty() {
            return SendOutcome::Ignored;
        }

        {
            let mut state = self.state.lock();
            if state.pending {
                crate::debug_log!("CHAT", "Send ignored: another message is pending");
                return SendOutcome::Ignored;
            }
            state.pending = true;
        }
        let mut pending = PendingGuard {
            state: &self.state,
            unwind_notice: None,
        };

        let _exchange = self.exchange.lock();
        self.state.lock().transcript.push(Message::user(message));
        pending.unwind_notice = Some(self.text.send_unreachable.clone());
        crate::debug_info!("CHAT", "Sending message ({} bytes)", message.len());

        let result = self.backend.send_message(message).and_then(|reply| {
            if !reply.success {
                return Err(ChatError::Backend(reply.error));
            }
            match reply.response {
                Some(response) => Ok((response, reply.session_id)),
                None => Err(ChatError::Transport(
                    "reply reported success without response text".to_string(),
                )),
            }
        });
        pending.unwind_notice = None;

        let mut state = self.state.lock();
        match result {
            Ok((response, session_id)) => {
                state.transcript.push(Message::assistant(response));
                if session_id.is_some() {
                    state.session_id = session_id;
                }
                SendOutcome::Replied
            }
            Err(e) => {
                crate::debug_error!("CHAT", "Send failed: {}", e);
                let notice = match &e {
                    ChatError::Backend(msg) => {
                        self.text.with_error(&self.text.send_failed, msg.as_deref())
                    }
                    ChatError::Transport(_) => self.text.send_unreachable.clone(),
                };
                state.transcript.push(Message::assistant(notice));
                SendOutcome::Failed(e)
            }
        }
    }

    /// Replace the transcript and session id with the backend's persisted
    /// copy.
    ///
    /// Returns the number of messages loaded. An empty persisted transcript
    /// leaves the local state untouched and returns 0.
    pub fn load_history(&self) -> Result<usize, ChatError> {
        let _exchange = self.exchange.lock();
        let reply = self.backend.history()?;
        if !reply.success {
            return Err(ChatError::Backend(reply.error));
        }

        let messages: Vec<Message> = reply
            .messages
            .unwrap_or_default()
            .into_iter()
            .filter_map(Message::from_wire)
            .collect();
        if messages.is_empty() {
            return Ok(0);
        }

        let count = messages.len();
        let mut state = self.state.lock();
        state.transcript = messages;
        state.session_id = reply.session_id;
        crate::debug_info!("CHAT", "Loaded {} messages from history", count);
        Ok(count)
    }

    /// Start a new session after confirmation; on success the transcript is
    /// emptied and the new session id adopted.
    pub fn new_session<C: Confirm + ?Sized>(
        &self,
        confirm: &C,
    ) -> Result<ActionOutcome, ChatError> {
        if !confirm.confirm(&self.text.confirm_new_session) {
            return Ok(ActionOutcome::Declined);
        }

        let _exchange = self.exchange.lock();
        let reply = self.backend.new_session().inspect_err(|e| {
            log::warn!("par-chat: could not start a new session: {}", e);
        })?;
        if !reply.success {
            return Err(ChatError::Backend(reply.error));
        }

        let mut state = self.state.lock();
        state.session_id = reply.session_id;
        state.transcript.clear();
        crate::debug_info!("CHAT", "Started new session {:?}", state.session_id);
        Ok(ActionOutcome::Completed)
    }

    /// Clear the history after confirmation.
    ///
    /// On success the transcript is emptied and a confirmation notice
    /// appended; on failure an error notice is appended and nothing is
    /// removed.
    pub fn clear_history<C: Confirm + ?Sized>(
        &self,
        confirm: &C,
    ) -> Result<ActionOutcome, ChatError> {
        if !confirm.confirm(&self.text.confirm_clear_history) {
            return Ok(ActionOutcome::Declined);
        }

        let _exchange = self.exchange.lock();
        let result = self.backend.clear_history().and_then(|reply| {
            if reply.success {
                Ok(())
            } else {
                Err(ChatError::Backend(reply.error))
            }
        });

        let mut state = self.state.lock();
        match result {
            Ok(()) => {
                state.transcript.clear();
                state
                    .transcript
                    .push(Message::assistant(self.text.history_cleared.clone()));
                crate::debug_info!("CHAT", "History cleared");
                Ok(ActionOutcome::Completed)
            }
            Err(e) => {
                crate::debug_error!("CHAT", "Clear history failed: {}", e);
                let notice = match &e {
                    ChatError::Backend(msg) => {
                        self.text.with_error(&self.text.clear_failed, msg.as_deref())
                    }
                    ChatError::Transport(_) => self.text.clear_unreachable.clone(),
                };
                state.transcript.push(Message::assistant(notice));
                Err(e)
            }
        }
    }

    /// Fetch statistics for the active session. Does not touch the
    /// transcript.
    pub fn session_summary(&self) -> Result<SessionSummary, ChatError> {
        let _exchange = self.exchange.lock();
        let reply = self.backend.session_summary()?;
        if !reply.success {
            return Err(ChatError::Backend(reply.error));
        }
        reply.summary.ok_or_else(|| {
            ChatError::Transport("summary reply reported success without a summary".to_string())
        })
    }

    /// Fetch backend and LLM status.
    pub fn status(&self) -> Result<BackendStatus, ChatError> {
        let _exchange = self.exchange.lock();
        let status = self.backend.status()?;
        if !status.success {
            return Err(ChatError::Backend(status.error));
        }
        Ok(status)
    }

    /// Fetch statistics across the user's recent sessions.
    pub fn session_stats(&self) -> Result<SessionStats, ChatError> {
        let _exchange = self.exchange.lock();
        let stats = self.backend.session_stats()?;
        if !stats.success {
            return Err(ChatError::Backend(stats.error));
        }
        Ok(stats)
    }
}
