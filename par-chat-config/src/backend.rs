//! Backend endpoint configuration.
//!
//! Describes where the chat backend lives, which paths serve each exchange,
//! and the HTTP policy (timeout, response size limit, extra headers, plain
//! HTTP opt-in) applied to every request.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::ConfigError;

/// One backend exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `POST` a user message, receive the reply.
    Chat,
    /// `GET` the persisted transcript of the active session.
    History,
    /// `POST` to start a fresh session.
    NewSession,
    /// `POST` to delete the active session's messages.
    ClearHistory,
    /// `GET` statistics for the active session.
    SessionSummary,
    /// `GET` backend/LLM status.
    Status,
    /// `GET` statistics across the user's recent sessions.
    SessionStats,
}

impl Endpoint {
    /// Returns all variants of `Endpoint`
    pub fn variants() -> &'static [Endpoint] {
        &[
            Endpoint::Chat,
            Endpoint::History,
            Endpoint::NewSession,
            Endpoint::ClearHistory,
            Endpoint::SessionSummary,
            Endpoint::Status,
            Endpoint::SessionStats,
        ]
    }

    /// Short name used in log lines and validation messages.
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::Chat => "chat",
            Endpoint::History => "history",
            Endpoint::NewSession => "new_session",
            Endpoint::ClearHistory => "clear_history",
            Endpoint::SessionSummary => "session_summary",
            Endpoint::Status => "status",
            Endpoint::SessionStats => "session_stats",
        }
    }
}

/// Path of every exchange, relative to [`BackendConfig::base_url`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Endpoints {
    #[serde(default = "crate::defaults::chat_path")]
    pub chat: String,
    #[serde(default = "crate::defaults::history_path")]
    pub history: String,
    #[serde(default = "crate::defaults::new_session_path")]
    pub new_session: String,
    #[serde(default = "crate::defaults::clear_history_path")]
    pub clear_history: String,
    #[serde(default = "crate::defaults::session_summary_path")]
    pub session_summary: String,
    #[serde(default = "crate::defaults::status_path")]
    pub status: String,
    #[serde(default = "crate::defaults::session_stats_path")]
    pub session_stats: String,
}

impl Endpoints {
    /// Path configured for `endpoint`.
    pub fn path(&self, endpoint: Endpoint) -> &str {
        match endpoint {
            Endpoint::Chat => &self.chat,
            Endpoint::History => &self.history,
            Endpoint::NewSession => &self.new_session,
            Endpoint::ClearHistory => &self.clear_history,
            Endpoint::SessionSummary => &self.session_summary,
            Endpoint::Status => &self.status,
            Endpoint::SessionStats => &self.session_stats,
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            chat: crate::defaults::chat_path(),
            history: crate::defaults::history_path(),
            new_session: crate::defaults::new_session_path(),
            clear_history: crate::defaults::clear_history_path(),
            session_summary: crate::defaults::session_summary_path(),
            status: crate::defaults::status_path(),
            session_stats: crate::defaults::session_stats_path(),
        }
    }
}

/// Connection settings for the chat backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendConfig {
    /// Scheme, host and optional port, e.g. `https://intranet.example.com`
    #[serde(default = "crate::defaults::base_url")]
    pub base_url: String,

    /// Per-exchange paths
    #[serde(default)]
    pub endpoints: Endpoints,

    /// Extra headers sent with every request (e.g. a session `Cookie`)
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,

    /// Global request timeout in seconds (default: 60)
    #[serde(default = "crate::defaults::timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum accepted response body size in bytes (default: 1 MB)
    #[serde(default = "crate::defaults::max_response_bytes")]
    pub max_response_bytes: usize,

    /// Permit plain `http://` base URLs for non-loopback hosts (default: false)
    #[serde(default)]
    pub allow_http: bool,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: crate::defaults::base_url(),
            endpoints: Endpoints::default(),
            headers: HashMap::new(),
            timeout_secs: crate::defaults::timeout_secs(),
            max_response_bytes: crate::defaults::max_response_bytes(),
            allow_http: false,
        }
    }
}

impl BackendConfig {
    /// Backend at `base_url` with every other setting at its default.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Absolute URL for `endpoint`: base URL without trailing slashes joined
    /// with the endpoint path, which always gets exactly one leading slash.
    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = self.endpoints.path(endpoint).trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Whether the base URL uses TLS.
    pub fn is_https(&self) -> bool {
        self.base_url.starts_with("https://")
    }

    /// Host part of the base URL (no scheme, port, path, or userinfo).
    pub fn host(&self) -> Option<&str> {
        let rest = self.base_url.split_once("://")?.1;
        let authority = rest.split(['/', '?', '#']).next()?;
        let authority = authority.rsplit_once('@').map_or(authority, |(_, h)| h);
        let host = if authority.starts_with('[') {
            // IPv6 literal keeps its brackets
            authority.split_once(']').map(|(h, _)| &authority[..h.len() + 1])?
        } else {
            authority.split(':').next()?
        };
        if host.is_empty() { None } else { Some(host) }
    }

    /// Whether the base URL points at this machine.
    pub fn is_loopback(&self) -> bool {
        matches!(
            self.host().map(|h| h.to_ascii_lowercase()).as_deref(),
            Some("localhost") | Some("127.0.0.1") | Some("[::1]")
        )
    }

    /// Check the settings that would otherwise fail at request time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::Validation(format!(
                "backend.base_url '{}' must start with http:// or https://",
                self.base_url
            )));
        }
        if self.host().is_none() {
            return Err(ConfigError::Validation(format!(
                "backend.base_url '{}' has no host",
                self.base_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "backend.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.max_response_bytes == 0 {
            return Err(ConfigError::Validation(
                "backend.max_response_bytes must be greater than 0".to_string(),
            ));
        }
        for endpoint in Endpoint::variants() {
            if self.endpoints.path(*endpoint).trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "backend.endpoints.{} must not be empty",
                    endpoint.name()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_backend() {
        let backend = BackendConfig::default();
        assert_eq!(backend.base_url, "http://localhost:5000");
        assert_eq!(backend.timeout_secs, 60);
        assert_eq!(backend.max_response_bytes, 1_048_576);
        assert!(!backend.allow_http);
        assert!(backend.headers.is_empty());
        assert_eq!(backend.endpoints.chat, "/chatbot/chat");
        assert!(backend.validate().is_ok());
    }

    #[test]
    fn test_endpoint_url_joins_slashes() {
        let mut backend = BackendConfig::with_base_url("https://example.com/");
        assert_eq!(
            backend.endpoint_url(Endpoint::Chat),
            "https://example.com/chatbot/chat"
        );
        backend.endpoints.history = "api/history".to_string();
        assert_eq!(
            backend.endpoint_url(Endpoint::History),
            "https://example.com/api/history"
        );
    }

    #[test]
    fn test_host_parsing() {
        let host = |url: &str| BackendConfig::with_base_url(url).host().map(str::to_string);
        assert_eq!(host("https://example.com"), Some("example.com".to_string()));
        assert_eq!(host("http://127.0.0.1:8080/x"), Some("127.0.0.1".to_string()));
        assert_eq!(host("http://user:pw@intranet:80"), Some("intranet".to_string()));
        assert_eq!(host("http://[::1]:5000"), Some("[::1]".to_string()));
        assert_eq!(host("no-scheme"), None);
        assert_eq!(host("https://"), None);
    }

    #[test]
    fn test_loopback() {
        assert!(BackendConfig::with_base_url("http://localhost:5000").is_loopback());
        assert!(BackendConfig::with_base_url("http://LOCALHOST").is_loopback());
        assert!(BackendConfig::with_base_url("http://[::1]:1").is_loopback());
        assert!(!BackendConfig::with_base_url("http://intranet.local").is_loopback());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(BackendConfig::with_base_url("ftp://x").validate().is_err());

        let mut backend = BackendConfig::default();
        backend.timeout_secs = 0;
        assert!(backend.validate().is_err());

        let mut backend = BackendConfig::default();
        backend.endpoints.status = "  ".to_string();
        let err = backend.validate().unwrap_err();
        assert!(err.to_string().contains("endpoints.status"));
    }
}
