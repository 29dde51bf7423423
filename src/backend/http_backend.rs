//! `ChatBackend` over HTTP(S) with JSON bodies.
//!
//! - HTTPS-only policy for remote hosts (plain HTTP requires explicit opt-in;
//!   loopback hosts are always allowed)
//! - Credential headers are never sent over plain HTTP to a remote host
//! - Configurable global timeout and response size limit

use serde::de::DeserializeOwned;

use par_chat_config::{BackendConfig, ConfigError, Endpoint};

use super::ChatBackend;
use super::wire::{
    BackendStatus, ClearReply, HistoryReply, NewSessionReply, SendReply, SendRequest,
    SessionStats, SummaryReply,
};
use crate::error::ChatError;

/// HTTP implementation of [`ChatBackend`].
pub struct HttpBackend {
    config: BackendConfig,
    agent: ureq::Agent,
}

impl std::fmt::Debug for HttpBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Header values may be cookies or tokens.
        f.debug_struct("HttpBackend")
            .field("base_url", &self.config.base_url)
            .field("headers", &self.config.headers.keys().collect::<Vec<_>>())
            .field("timeout_secs", &self.config.timeout_secs)
            .finish()
    }
}

/// Header names whose values authenticate the user.
fn is_credential_header(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    lower == "authorization"
        || lower == "cookie"
        || lower.contains("token")
        || lower.contains("secret")
}

impl HttpBackend {
    /// Validate `config` and build the HTTP agent.
    pub fn new(config: BackendConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Self::check_transport_policy(&config)?;

        let agent = crate::http::agent(std::time::Duration::from_secs(config.timeout_secs));
        crate::debug_info!("BACKEND", "HTTP backend ready for {}", config.base_url);
        Ok(Self { config, agent })
    }

    /// The configuration this backend was built from.
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    fn check_transport_policy(config: &BackendConfig) -> Result<(), ConfigError> {
        if config.is_https() || config.is_loopback() {
            return Ok(());
        }

        // Always refuse credentials over HTTP regardless of the opt-in flag,
        // because they would be transmitted in the clear.
        if let Some(name) = config.headers.keys().find(|k| is_credential_header(k)) {
            return Err(ConfigError::Validation(format!(
                "Refusing to send credential header '{}' over insecure HTTP to {}. Use HTTPS.",
                name, config.base_url
            )));
        }

        if !config.allow_http {
            return Err(ConfigError::Validation(format!(
                "Backend URL '{}' uses insecure HTTP. Set `backend.allow_http: true` to allow it \
                 (not recommended), or use HTTPS.",
                config.base_url
            )));
        }

        log::warn!(
            "par-chat backend: talking to '{}' over insecure HTTP (allow_http is enabled). \
             Switch to HTTPS when possible.",
            config.base_url
        );
        Ok(())
    }

    fn with_headers<B>(&self, mut request: ureq::RequestBuilder<B>) -> ureq::RequestBuilder<B> {
        for (key, value) in &self.config.headers {
            request = request.header(key.as_str(), value.as_str());
        }
        request
    }

    fn get<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, ChatError> {
        let url = self.config.endpoint_url(endpoint);
        crate::debug_log!("BACKEND", "GET {}", url);

        let request = self.with_headers(self.agent.get(&url));
        let response = request
            .call()
            .map_err(|e| transport_error(endpoint, &url, e))?;
        self.read_json(endpoint, &url, response)
    }

    fn post<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        body: Option<String>,
    ) -> Result<T, ChatError> {
        let url = self.config.endpoint_url(endpoint);
        crate::debug_log!("BACKEND", "POST {}", url);

        let request = self
            .with_headers(self.agent.post(&url))
            .header("Content-Type", "application/json");
        let result = match body {
            Some(body) => request.send(body.as_bytes()),
            None => request.send_empty(),
        };
        let response = result.map_err(|e| transport_error(endpoint, &url, e))?;
        self.read_json(endpoint, &url, response)
    }

    fn read_json<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        url: &str,
        mut response: ureq::http::Response<ureq::Body>,
    ) -> Result<T, ChatError> {
        let status = response.status();
        if !status.is_success() {
            crate::debug_info!(
                "BACKEND",
                "{} answered HTTP {}; reading failure body",
                endpoint.name(),
                status.as_u16()
            );
        }

        let body = response
            .body_mut()
            .with_config()
            .limit(self.config.max_response_bytes as u64)
            .read_to_string()
            .map_err(|e| transport_error(endpoint, url, e))?;

        serde_json::from_str(&body).map_err(|e| {
            crate::debug_error!(
                "BACKEND",
                "{} returned unparseable body (HTTP {}): {}",
                endpoint.name(),
                status.as_u16(),
                e
            );
            ChatError::Transport(format!(
                "invalid JSON from {} (HTTP {}): {}",
                url,
                status.as_u16(),
                e
            ))
        })
    }
}

fn transport_error(endpoint: Endpoint, url: &str, err: ureq::Error) -> ChatError {
    crate::debug_error!("BACKEND", "{} request to {} failed: {}", endpoint.name(), url, err);
    log::warn!("par-chat backend: {} request failed: {}", endpoint.name(), err);
    ChatError::Transport(format!("request to {} failed: {}", url, err))
}

impl ChatBackend for HttpBackend {
    fn send_message(&self, message: &str) -> Result<SendReply, ChatError> {
        let body = serde_json::to_string(&SendRequest { message })
            .map_err(|e| ChatError::Transport(format!("could not encode message: {e}")))?;
        self.post(Endpoint::Chat, Some(body))
    }

    fn history(&self) -> Result<HistoryReply, ChatError> {
        self.get(Endpoint::History)
    }

    fn new_session(&self) -> Result<NewSessionReply, ChatError> {
        self.post(Endpoint::NewSession, None)
    }

    fn clear_history(&self) -> Result<ClearReply, ChatError> {
        self.post(Endpoint::ClearHistory, None)
    }

    fn session_summary(&self) -> Result<SummaryReply, ChatError> {
        self.get(Endpoint::SessionSummary)
    }

    fn status(&self) -> Result<BackendStatus, ChatError> {
        self.get(Endpoint::Status)
    }

    fn session_stats(&self) -> Result<SessionStats, ChatError> {
        self.get(Endpoint::SessionStats)
    }
}
