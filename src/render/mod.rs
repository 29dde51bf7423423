//! Safe rendering of untrusted message text.
//!
//! Sub-modules:
//! - [`url_detection`] — finds `http(s)://` URLs within a line
//! - [`html`]          — realises display nodes as escaped HTML
//!
//! [`render`] turns raw text into [`DisplayNode`]s: plain text runs, line
//! breaks, and links. Nothing in the input is ever interpreted as markup or
//! decoded; every node carries a verbatim slice of the source, so
//! [`reconstruct`] gives back the input exactly.

pub mod html;
pub mod url_detection;


pub use html::{escape_html, to_html};
pub use url_detection::{DetectedUrl, detect_urls_in_line};

/// One structural unit of rendered message content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayNode {
    /// A run of plain text, never empty.
    Text(String),
    /// An explicit line break (a `\n` in the source).
    LineBreak,
    /// A hyperlink whose target and label are both the matched URL.
    Link(String),
}

impl DisplayNode {
    /// The source text this node stands for.
    pub fn source_text(&self) -> &str {
        match self {
            DisplayNode::Text(text) => text,
            DisplayNode::LineBreak => "\n",
            DisplayNode::Link(url) => url,
        }
    }
}

/// Convert message content into display nodes.
///
/// Lines are split on `\n` (empty lines preserved); each line after the first
/// is preceded by a [`DisplayNode::LineBreak`]. Within a line, text before,
/// between and after URLs becomes [`DisplayNode::Text`] and every URL becomes
/// a [`DisplayNode::Link`]. Empty spans produce no node.
pub fn render(content: &str) -> Vec<DisplayNode> {
    let mut nodes = Vec::new();

    for (index, line) in content.split('\n').enumerate() {
        if index > 0 {
            nodes.push(DisplayNode::LineBreak);
        }

        let mut last_end = 0;
        for detected in detect_urls_in_line(line) {
            if detected.start > last_end {
                nodes.push(DisplayNode::Text(line[last_end..detected.start].to_string()));
            }
            last_end = detected.end;
            nodes.push(DisplayNode::Link(detected.url));
        }

        if last_end < line.len() {
            nodes.push(DisplayNode::Text(line[last_end..].to_string()));
        }
    }

    crate::debug_trace!(
        "RENDER",
        "Rendered {} bytes into {} nodes",
        content.len(),
        nodes.len()
    );
    nodes
}

/// Concatenate the source text of `nodes`; `reconstruct(&render(s)) == s`.
pub fn reconstruct(nodes: &[DisplayNode]) -> String {
    nodes.iter().map(DisplayNode::source_text).collect()
}
