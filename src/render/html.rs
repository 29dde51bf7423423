//! HTML realisation of display nodes.
//!
//! For callers that emit markup rather than building widgets: every text run
//! and URL is escaped, so the output contains no tags except the `<br>` and
//! `<a>` elements generated here.

use super::DisplayNode;

/// Escape the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render nodes as an HTML fragment.
///
/// Links open in a new browsing context without access to the opener.
pub fn to_html(nodes: &[DisplayNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            DisplayNode::Text(text) => out.push_str(&escape_html(text)),
            DisplayNode::LineBreak => out.push_str("<br>"),
            DisplayNode::Link(url) => {
                let url = escape_html(url);
                out.push_str(&format!(
                    r#"<a href="{url}" target="_blank" rel="noopener noreferrer">{url}</a>"#
                ));
            }
        }
    }
    out
}
