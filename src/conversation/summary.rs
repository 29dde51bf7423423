//! Plain-text rendition of a session summary, appended to the transcript by
//! the widget.

use chrono::{DateTime, NaiveDateTime};

use par_chat_config::UiText;

use crate::backend::SessionSummary;

/// Format `summary` as a multi-line assistant message.
///
/// The result is plain text; it goes through the same safe renderer as any
/// other message.
pub fn format_summary(summary: &SessionSummary, text: &UiText) -> String {
    let labels = &text.summary;
    let mut out = format!("{}\n\n", labels.title);

    out.push_str(&format!(
        "{}: {}\n",
        labels.id,
        summary.session_id.as_deref().unwrap_or(&text.unknown_time)
    ));
    out.push_str(&format!(
        "{}: {}\n",
        labels.started,
        format_timestamp(summary.started.as_deref(), &text.unknown_time)
    ));
    out.push_str(&format!(
        "{}: {}\n\n",
        labels.last_message,
        format_timestamp(summary.last_message.as_deref(), &text.unknown_time)
    ));

    out.push_str(&format!("{}:\n", labels.statistics));
    out.push_str(&format!(
        "• {}: {}\n",
        labels.total_messages, summary.total_messages
    ));
    out.push_str(&format!(
        "• {}: {}\n",
        labels.user_messages, summary.user_messages
    ));
    out.push_str(&format!(
        "• {}: {}\n",
        labels.assistant_messages, summary.assistant_messages
    ));
    out.push_str(&format!(
        "• {}: ~{}\n\n",
        labels.estimated_tokens, summary.estimated_tokens
    ));

    if summary.actions_executed.is_empty() {
        out.push_str(&format!("{}: {}\n", labels.actions, labels.no_actions));
    } else {
        out.push_str(&format!("{}:\n", labels.actions));
        for action in &summary.actions_executed {
            out.push_str(&format!(
                "• {}\n",
                labels.format_action(&action.action_type, action.count, action.successful)
            ));
        }
    }

    out
}

/// Reformat an ISO-8601 timestamp as `YYYY-MM-DD HH:MM:SS`.
///
/// Offsets are kept as sent, not converted to local time. Values that do not
/// parse are returned verbatim; a missing or blank value yields `unknown`.
pub fn format_timestamp(value: Option<&str>, unknown: &str) -> String {
    let raw = match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => return unknown.to_string(),
    };

    const DISPLAY: &str = "%Y-%m-%d %H:%M:%S";
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY).to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return dt.format(DISPLAY).to_string();
        }
    }
    raw.to_string()
}
