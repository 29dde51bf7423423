//! JSON bodies exchanged with the chat backend.
//!
//! Every reply carries `success`; the remaining fields are optional because
//! failing replies usually only carry `error`. Unknown fields are ignored.

use serde::{Deserialize, Deserializer, Serialize};

/// Body of the chat request.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SendRequest<'a> {
    pub message: &'a str,
}

/// Reply to a chat message.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SendReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// One persisted transcript entry. The role stays a string here so that
/// entries with roles the widget does not display can be skipped instead of
/// failing the whole reply.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct WireMessage {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: String,
}

/// Reply to a history fetch.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct HistoryReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub messages: Option<Vec<WireMessage>>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Reply to a new-session request.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct NewSessionReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Reply to a clear-history request.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ClearReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Executed-action statistics for one action type.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ActionStat {
    #[serde(rename = "type", default)]
    pub action_type: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub count: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub successful: u64,
}

/// Statistics for the active session.
///
/// `active` is false when the backend has no session for the user; the other
/// fields are then absent.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SessionSummary {
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub session_id: Option<String>,
    /// ISO-8601 start time
    #[serde(default)]
    pub started: Option<String>,
    /// ISO-8601 time of the latest message
    #[serde(default)]
    pub last_message: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_messages: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub user_messages: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub assistant_messages: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub system_messages: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub estimated_tokens: u64,
    #[serde(default)]
    pub actions_executed: Vec<ActionStat>,
    /// Explanation sent along with an inactive summary
    #[serde(default)]
    pub message: Option<String>,
}

/// Reply to a session-summary fetch.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SummaryReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub summary: Option<SessionSummary>,
    #[serde(default)]
    pub error: Option<String>,
}

/// LLM settings reported by the backend.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct LlmStatus {
    #[serde(default)]
    pub api_configured: bool,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub api_base: Option<String>,
    /// `production` when an API key is configured, `development` otherwise
    #[serde(default)]
    pub mode: Option<String>,
}

/// The user's current session as seen by the status endpoint.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SessionInfo {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub message_count: u64,
    #[serde(default)]
    pub active: bool,
}

/// The authenticated user.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct UserInfo {
    #[serde(default, alias = "nombre")]
    pub name: Option<String>,
    #[serde(default, alias = "rol")]
    pub role: Option<String>,
}

/// Reply to a status fetch.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct BackendStatus {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub llm_config: Option<LlmStatus>,
    #[serde(default)]
    pub session: Option<SessionInfo>,
    #[serde(default)]
    pub user: Option<UserInfo>,
    #[serde(default)]
    pub error: Option<String>,
}

/// One of the user's recent sessions.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SessionRecord {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub started: Option<String>,
    #[serde(default)]
    pub last_message: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default, deserialize_with = "lenient_count")]
    pub message_count: u64,
}

/// Reply to a session-stats fetch.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SessionStats {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_sessions: u64,
    #[serde(default)]
    pub sessions: Vec<SessionRecord>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Accept integers, floats, numeric strings, or null for a count.
///
/// SQL aggregates such as `SUM(success)` reach the JSON as decimals or
/// strings depending on the driver. Negative and unparseable values become 0.
fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(count_from_value(&value))
}

fn count_from_value(value: &serde_json::Value) -> u64 {
    match value {
        serde_json::Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f > 0.0).map(|f| f.round() as u64))
            .unwrap_or(0),
        serde_json::Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .or_else(|| {
                    s.parse::<f64>()
                        .ok()
                        .filter(|f| f.is_finite() && *f > 0.0)
                        .map(|f| f.round() as u64)
                })
                .unwrap_or(0)
        }
        _ => 0,
    }
}
