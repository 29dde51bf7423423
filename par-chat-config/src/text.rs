//! User-facing strings shown by the widget.
//!
//! Templates may contain an `{error}` placeholder, filled in with the
//! backend's error string (or [`UiText::unknown_error`] when it sent none).

use serde::{Deserialize, Serialize};

/// Welcome screen, confirmation prompts, and the assistant-side notices the
/// conversation appends on failures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiText {
    #[serde(default = "crate::defaults::welcome_title")]
    pub welcome_title: String,
    #[serde(default = "crate::defaults::welcome_body")]
    pub welcome_body: String,
    /// One-click prompts offered while the transcript is empty
    #[serde(default = "crate::defaults::quick_suggestions")]
    pub quick_suggestions: Vec<String>,

    #[serde(default = "crate::defaults::confirm_new_session")]
    pub confirm_new_session: String,
    #[serde(default = "crate::defaults::confirm_clear_history")]
    pub confirm_clear_history: String,

    /// Backend answered `success: false` to a chat message
    #[serde(default = "crate::defaults::send_failed")]
    pub send_failed: String,
    /// No usable answer to a chat message
    #[serde(default = "crate::defaults::send_unreachable")]
    pub send_unreachable: String,
    #[serde(default = "crate::defaults::history_cleared")]
    pub history_cleared: String,
    #[serde(default = "crate::defaults::clear_failed")]
    pub clear_failed: String,
    #[serde(default = "crate::defaults::clear_unreachable")]
    pub clear_unreachable: String,
    #[serde(default = "crate::defaults::summary_unavailable")]
    pub summary_unavailable: String,
    #[serde(default = "crate::defaults::summary_unreachable")]
    pub summary_unreachable: String,

    #[serde(default = "crate::defaults::unknown_error")]
    pub unknown_error: String,
    /// Shown for summary timestamps the backend did not provide
    #[serde(default = "crate::defaults::unknown_time")]
    pub unknown_time: String,

    /// Labels of the formatted session summary
    #[serde(default)]
    pub summary: SummaryLabels,
}

impl Default for UiText {
    fn default() -> Self {
        Self {
            welcome_title: crate::defaults::welcome_title(),
            welcome_body: crate::defaults::welcome_body(),
            quick_suggestions: crate::defaults::quick_suggestions(),
            confirm_new_session: crate::defaults::confirm_new_session(),
            confirm_clear_history: crate::defaults::confirm_clear_history(),
            send_failed: crate::defaults::send_failed(),
            send_unreachable: crate::defaults::send_unreachable(),
            history_cleared: crate::defaults::history_cleared(),
            clear_failed: crate::defaults::clear_failed(),
            clear_unreachable: crate::defaults::clear_unreachable(),
            summary_unavailable: crate::defaults::summary_unavailable(),
            summary_unreachable: crate::defaults::summary_unreachable(),
            unknown_error: crate::defaults::unknown_error(),
            unknown_time: crate::defaults::unknown_time(),
            summary: SummaryLabels::default(),
        }
    }
}

impl UiText {
    /// Fill the `{error}` placeholder of `template`.
    pub fn with_error(&self, template: &str, error: Option<&str>) -> String {
        let error = match error {
            Some(e) if !e.trim().is_empty() => e,
            _ => self.unknown_error.as_str(),
        };
        template.replace("{error}", error)
    }
}

/// Labels used when a session summary is formatted as a message.
///
/// `action_line` is a template with `{type}`, `{count}` and `{successful}`
/// placeholders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryLabels {
    #[serde(default = "crate::defaults::summary_title")]
    pub title: String,
    #[serde(default = "crate::defaults::summary_id")]
    pub id: String,
    #[serde(default = "crate::defaults::summary_started")]
    pub started: String,
    #[serde(default = "crate::defaults::summary_last_message")]
    pub last_message: String,
    #[serde(default = "crate::defaults::summary_statistics")]
    pub statistics: String,
    #[serde(default = "crate::defaults::summary_total_messages")]
    pub total_messages: String,
    #[serde(default = "crate::defaults::summary_user_messages")]
    pub user_messages: String,
    #[serde(default = "crate::defaults::summary_assistant_messages")]
    pub assistant_messages: String,
    #[serde(default = "crate::defaults::summary_estimated_tokens")]
    pub estimated_tokens: String,
    #[serde(default = "crate::defaults::summary_actions")]
    pub actions: String,
    #[serde(default = "crate::defaults::summary_no_actions")]
    pub no_actions: String,
    #[serde(default = "crate::defaults::summary_action_line")]
    pub action_line: String,
}

impl Default for SummaryLabels {
    fn default() -> Self {
        Self {
            title: crate::defaults::summary_title(),
            id: crate::defaults::summary_id(),
            started: crate::defaults::summary_started(),
            last_message: crate::defaults::summary_last_message(),
            statistics: crate::defaults::summary_statistics(),
            total_messages: crate::defaults::summary_total_messages(),
            user_messages: crate::defaults::summary_user_messages(),
            assistant_messages: crate::defaults::summary_assistant_messages(),
            estimated_tokens: crate::defaults::summary_estimated_tokens(),
            actions: crate::defaults::summary_actions(),
            no_actions: crate::defaults::summary_no_actions(),
            action_line: crate::defaults::summary_action_line(),
        }
    }
}

impl SummaryLabels {
    /// Fill the `action_line` template for one action type.
    pub fn format_action(&self, action_type: &str, count: u64, successful: u64) -> String {
        self.action_line
            .replace("{count}", &count.to_string())
            .replace("{successful}", &successful.to_string())
            .replace("{type}", action_type)
    }
}
