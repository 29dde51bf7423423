//! URL detection within a single line of message text.

use regex::Regex;
use std::sync::OnceLock;

/// `http://` or `https://` followed by one or more characters outside the
/// ECMAScript `\s` set.
///
/// That set differs from Unicode `White_Space` (which `\S` would use): it
/// includes U+FEFF and excludes U+0085.
const URL_PATTERN: &str = concat!(
    r"https?://",
    r"[^\t\n\x0B\x0C\r\x20\xA0\x{1680}\x{2000}-\x{200A}",
    r"\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+",
);

static URL_REGEX: OnceLock<Regex> = OnceLock::new();

/// Get the compiled URL regex pattern
fn url_regex() -> &'static Regex {
    URL_REGEX.get_or_init(|| {
        // Greedy up to the next whitespace; trailing punctuation stays part of
        // the URL.
        Regex::new(URL_PATTERN).expect("Failed to compile URL regex")
    })
}

/// Detected URL with its byte span in the line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedUrl {
    /// The URL text, exactly as it appears in the line
    pub url: String,
    /// Start byte offset
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

/// Detect URLs in a line of text, left to right.
///
/// Matches never overlap: scanning resumes after the end of each match.
pub fn detect_urls_in_line(line: &str) -> Vec<DetectedUrl> {
    url_regex()
        .find_iter(line)
        .map(|mat| DetectedUrl {
            url: mat.as_str().to_string(),
            start: mat.start(),
            end: mat.end(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_http_url() {
        let text = "Visit https://example.com for more info";
        let urls = detect_urls_in_line(text);
        assert_eq!(urls.len(), 1);
        assert_eq!(urls[0].url, "https://example.com");
        assert_eq!(urls[0].start, 6);
        assert_eq!(urls[0].end, 25); // Exclusive end position
    }

    #[test]
    fn test_detect_multiple_urls() {
        let text = "See https://example.com and http://test.org";
        let urls = detect_urls_in_line(text);
        assert_eq!(urls.len(), 2);
        assert_eq!(urls[0].url, "https://example.com");
        assert_eq!(urls[1].url, "http://test.org");
    }

    #[test]
    fn test_no_urls() {
        let urls = detect_urls_in_line("This line has no URLs at all");
        assert!(urls.is_empty());
    }

    #[test]
    fn test_only_http_schemes() {
        let text = "ftp://files.com www.example.com file:///path";
        assert!(detect_urls_in_line(text).is_empty());
    }

    #[test]
    fn test_scheme_alone_is_not_a_url() {
        assert!(detect_urls_in_line("http:// alone").is_empty());
        assert!(detect_urls_in_line("https://").is_empty());
    }

    #[test]
    fn test_trailing_punctuation_kept() {
        let urls = detect_urls_in_line("(see https://x.com/a?b=1&c=2).");
        assert_eq!(urls.len(), 1);
        assert_eq!(urls[0].url, "https://x.com/a?b=1&c=2).");
    }

    #[test]
    fn test_scheme_inside_word() {
        // JS-style matching: no word boundary required before the scheme
        let urls = detect_urls_in_line("xhttp://a.b");
        assert_eq!(urls.len(), 1);
        assert_eq!(urls[0].url, "http://a.b");
        assert_eq!(urls[0].start, 1);
    }

    #[test]
    fn test_unicode_whitespace_ends_url() {
        let text = "go https://a.b/ü\u{00a0}next";
        let urls = detect_urls_in_line(text);
        assert_eq!(urls[0].url, "https://a.b/ü");
        assert_eq!(&text[urls[0].start..urls[0].end], urls[0].url);
    }

    #[test]
    fn test_byte_order_mark_ends_url() {
        let text = "http://a.b\u{feff}tail";
        let urls = detect_urls_in_line(text);
        assert_eq!(urls.len(), 1);
        assert_eq!(urls[0].url, "http://a.b");
    }

    #[test]
    fn test_next_line_char_stays_in_url() {
        let urls = detect_urls_in_line("http://a.b\u{0085}tail");
        assert_eq!(urls.len(), 1);
        assert_eq!(urls[0].url, "http://a.b\u{0085}tail");
    }

    #[test]
    fn test_whitespace_ends_url() {
        for sep in ['\t', '\r', '\x0B', '\x0C', ' ', '\u{3000}'] {
            let text = format!("http://a.b{sep}tail");
            let urls = detect_urls_in_line(&text);
            assert_eq!(urls[0].url, "http://a.b", "separator {sep:?}");
        }
    }
}
