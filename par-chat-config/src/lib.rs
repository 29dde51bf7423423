//! Configuration system for the par-chat widget core.
//!
//! This crate provides configuration loading, saving, and default values:
//!
//! - Backend base URL, per-exchange endpoint paths, and HTTP policy
//! - User-facing texts (welcome screen, confirmations, failure notices)
//! - `${VAR}` environment substitution with an allowlist

pub mod backend;
pub mod config;
pub mod defaults;
pub mod env_vars;
pub mod error;
pub mod text;

pub use backend::{BackendConfig, Endpoint, Endpoints};
pub use config::ChatConfig;
pub use env_vars::{substitute_variables, substitute_variables_with_allowlist};
pub use error::ConfigError;
pub use text::{SummaryLabels, UiText};
