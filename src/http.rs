//! HTTP client helper with native-tls support.
//!
//! Uses native-tls (the system TLS library: Schannel on Windows, OpenSSL on
//! Linux, Security.framework on macOS) with the platform root certificates.

use std::time::Duration;

use ureq::Agent;
use ureq::tls::{RootCerts, TlsConfig, TlsProvider};

/// Create an HTTP agent for backend exchanges.
///
/// 4xx/5xx statuses are returned as ordinary responses: the chat backend
/// reports failures as `{"success": false, "error": ...}` bodies on error
/// statuses, and those bodies must still be read.
pub fn agent(timeout: Duration) -> Agent {
    let tls_config = TlsConfig::builder()
        .provider(TlsProvider::NativeTls)
        .root_certs(RootCerts::PlatformVerifier)
        .build();

    Agent::config_builder()
        .tls_config(tls_config)
        .timeout_global(Some(timeout))
        .http_status_as_error(false)
        .build()
        .into()
}
