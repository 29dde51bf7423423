//! State of the chat panel: open flag, input buffer, and the conversation
//! behind it.
//!
//! The owner of the UI tree draws from this state; nothing here creates
//! elements or styles them.

use par_chat_config::UiText;

use crate::conversation::{
    ActionOutcome, Confirm, ConversationClient, Message, Role, SendOutcome, format_summary,
};
use crate::error::ChatError;
use crate::render::{DisplayNode, render};

/// A transcript entry ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    pub role: Role,
    pub nodes: Vec<DisplayNode>,
}

/// Content shown while the transcript is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WelcomeScreen<'a> {
    pub title: &'a str,
    pub body: &'a str,
    pub quick_suggestions: &'a [String],
}

/// The chat panel.
pub struct ChatWidget {
    client: ConversationClient,
    is_open: bool,
    /// Text typed into the input box, not yet sent
    pub input: String,
}

impl ChatWidget {
    /// Create a closed widget around `client`.
    pub fn new(client: ConversationClient) -> Self {
        Self {
            client,
            is_open: false,
            input: String::new(),
        }
    }

    pub fn client(&self) -> &ConversationClient {
        &self.client
    }

    fn text(&self) -> &UiText {
        self.client.text()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Flip the panel between open and closed.
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Whether the welcome screen replaces the transcript.
    pub fn shows_welcome(&self) -> bool {
        self.client.transcript_len() == 0
    }

    pub fn welcome(&self) -> WelcomeScreen<'_> {
        let text = self.text();
        WelcomeScreen {
            title: &text.welcome_title,
            body: &text.welcome_body,
            quick_suggestions: &text.quick_suggestions,
        }
    }

    /// Send the input buffer. It is cleared only when the send was accepted,
    /// so ignored input (blank, or another send pending) stays editable.
    pub fn submit_input(&mut self) -> SendOutcome {
        let outcome = self.client.send_message(&self.input);
        if outcome != SendOutcome::Ignored {
            self.input.clear();
        }
        outcome
    }

    /// Send the `index`-th quick suggestion. `None` if there is no such
    /// suggestion.
    pub fn send_quick_message(&self, index: usize) -> Option<SendOutcome> {
        let suggestion = self.text().quick_suggestions.get(index)?;
        Some(self.client.send_message(suggestion))
    }

    /// Fetch the session summary and append it as an assistant message.
    ///
    /// Inactive sessions and backend failures append the "unavailable" text;
    /// transport failures append the "unreachable" text.
    pub fn show_session_summary(&self) -> Result<(), ChatError> {
        let text = self.text();
        match self.client.session_summary() {
            Ok(summary) if summary.active => {
                self.client
                    .append_assistant_message(format_summary(&summary, text));
                Ok(())
            }
            Ok(_) => {
                self.client
                    .append_assistant_message(text.summary_unavailable.clone());
                Ok(())
            }
            Err(e) => {
                log::warn!("par-chat: session summary failed: {}", e);
                let notice = if e.is_transport() {
                    &text.summary_unreachable
                } else {
                    &text.summary_unavailable
                };
                self.client.append_assistant_message(notice.clone());
                Err(e)
            }
        }
    }

    pub fn load_history(&self) -> Result<usize, ChatError> {
        self.client.load_history()
    }

    pub fn new_session<C: Confirm + ?Sized>(
        &self,
        confirm: &C,
    ) -> Result<ActionOutcome, ChatError> {
        self.client.new_session(confirm)
    }

    pub fn clear_history<C: Confirm + ?Sized>(
        &self,
        confirm: &C,
    ) -> Result<ActionOutcome, ChatError> {
        self.client.clear_history(confirm)
    }

    /// Whether the typing indicator should be shown.
    pub fn is_pending(&self) -> bool {
        self.client.is_pending()
    }

    /// The transcript with every message run through [`render`].
    pub fn rendered_transcript(&self) -> Vec<RenderedMessage> {
        self.client
            .transcript()
            .iter()
            .map(render_message)
            .collect()
    }
}

fn render_message(message: &Message) -> RenderedMessage {
    RenderedMessage {
        role: message.role(),
        nodes: render(message.content()),
    }
}
