//! Conversation state and the sequencing of backend exchanges.
//!
//! Sub-modules:
//! - [`types`]   — `Role`, `Message`, `Session`
//! - [`client`]  — `ConversationClient`, the owner of the transcript
//! - [`confirm`] — injected confirmation for destructive actions
//! - [`summary`] — plain-text session summary

pub mod client;
pub mod confirm;
pub mod summary;
pub mod types;


pub use client::{ActionOutcome, ConversationClient, SendOutcome};
pub use confirm::{AlwaysConfirm, Confirm, NeverConfirm};
pub use summary::{format_summary, format_timestamp};
pub use types::{Message, Role, Session};
