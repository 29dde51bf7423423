// Library exports for the chat widget core.
//
// # Mutex Usage Policy
//
// par-chat uses `parking_lot::Mutex` for all shared state. The conversation
// client holds two: the exchange lock, which serializes backend round trips,
// and the state lock around the transcript. Lock order is always exchange
// then state, and the state lock is never held across a round trip.

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[macro_use]
pub mod debug;

pub mod backend;
pub mod conversation;
pub mod error;
pub mod http;
pub mod render;
pub mod widget;

pub use backend::{ChatBackend, HttpBackend};
pub use conversation::{
    ActionOutcome, AlwaysConfirm, Confirm, ConversationClient, Message, NeverConfirm, Role,
    SendOutcome, Session,
};
pub use error::ChatError;
pub use render::{DisplayNode, reconstruct, render};
pub use widget::{ChatWidget, RenderedMessage, WelcomeScreen};

pub use par_chat_config::{BackendConfig, ChatConfig, ConfigError, UiText};
