//! Default value functions for configuration.
//!
//! Used as `#[serde(default = "crate::defaults::...")]` attributes so a
//! minimal YAML file only needs to name the values it changes.

// ── Backend ────────────────────────────────────────────────────────────────

pub fn base_url() -> String {
    "http://localhost:5000".to_string()
}

pub fn timeout_secs() -> u64 {
    60
}

pub fn max_response_bytes() -> usize {
    1_048_576
}

pub fn chat_path() -> String {
    "/chatbot/chat".to_string()
}

pub fn history_path() -> String {
    "/chatbot/history".to_string()
}

pub fn new_session_path() -> String {
    "/chatbot/new-session".to_string()
}

pub fn clear_history_path() -> String {
    "/chatbot/clear-history".to_string()
}

pub fn session_summary_path() -> String {
    "/chatbot/session-summary".to_string()
}

pub fn status_path() -> String {
    "/chatbot/status".to_string()
}

pub fn session_stats_path() -> String {
    "/chatbot/session-stats".to_string()
}

// ── User-facing text ───────────────────────────────────────────────────────

pub fn welcome_title() -> String {
    "Hi! I'm your virtual assistant".to_string()
}

pub fn welcome_body() -> String {
    "I can help you with information and actions on the intranet.".to_string()
}

pub fn quick_suggestions() -> Vec<String> {
    vec![
        "How many documents are available?".to_string(),
        "What are my pending vacation days?".to_string(),
        "I want to create a support ticket".to_string(),
    ]
}

pub fn confirm_new_session() -> String {
    "Are you sure you want to start a new conversation? The current history will be lost."
        .to_string()
}

pub fn confirm_clear_history() -> String {
    "Are you sure you want to clear the whole conversation history? This cannot be undone."
        .to_string()
}

pub fn send_failed() -> String {
    "Sorry, an error occurred: {error}".to_string()
}

pub fn send_unreachable() -> String {
    "Sorry, I can't reach the server right now. Please try again later.".to_string()
}

pub fn history_cleared() -> String {
    "✅ History cleared. Starting a new conversation.".to_string()
}

pub fn clear_failed() -> String {
    "Could not clear history: {error}".to_string()
}

pub fn clear_unreachable() -> String {
    "Could not clear the history.".to_string()
}

pub fn summary_unavailable() -> String {
    "No active session, or the summary could not be retrieved.".to_string()
}

pub fn summary_unreachable() -> String {
    "Could not retrieve the session summary.".to_string()
}

pub fn unknown_error() -> String {
    "unknown error".to_string()
}

pub fn unknown_time() -> String {
    "Unknown".to_string()
}

// Session summary labels

pub fn summary_title() -> String {
    "📊 Session summary".to_string()
}

pub fn summary_id() -> String {
    "ID".to_string()
}

pub fn summary_started() -> String {
    "Started".to_string()
}

pub fn summary_last_message() -> String {
    "Last message".to_string()
}

pub fn summary_statistics() -> String {
    "Statistics".to_string()
}

pub fn summary_total_messages() -> String {
    "Total messages".to_string()
}

pub fn summary_user_messages() -> String {
    "User messages".to_string()
}

pub fn summary_assistant_messages() -> String {
    "Assistant replies".to_string()
}

pub fn summary_estimated_tokens() -> String {
    "Estimated tokens".to_string()
}

pub fn summary_actions() -> String {
    "Executed actions".to_string()
}

pub fn summary_no_actions() -> String {
    "none".to_string()
}

pub fn summary_action_line() -> String {
    "{type}: {count} times ({successful} successful)".to_string()
}
