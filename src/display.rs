//! Rendering fetched bodies for terminal output.
//!
//! The harness never prints whole response bodies; each one is cut down to
//! a short prefix and the set is shown as a pretty-printed JSON array so the
//! output stays readable and diffable.

use anyhow::{Context, Result};

/// Truncate `body` to at most `max_chars` characters.
///
/// Counts characters rather than bytes so a multi-byte code point is never
/// split in half.
pub fn truncate_body(body: &str, max_chars: usize) -> String {
    body.chars().take(max_chars).collect()
}

/// Render response bodies as a pretty-printed JSON array of truncated
/// prefixes, one element per body in input order.
pub fn format_bodies(bodies: &[String], max_chars: usize) -> Result<String> {
    let truncated: Vec<String> = bodies
        .iter()
        .map(|body| truncate_body(body, max_chars))
        .collect();

    serde_json::to_string_pretty(&truncated).context("Failed to render response bodies as JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_long_body() {
        let body = "a".repeat(100);
        assert_eq!(truncate_body(&body, 20).len(), 20);
    }

    #[test]
    fn test_truncate_short_body_unchanged() {
        assert_eq!(truncate_body("short", 20), "short");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        // Four 3-byte code points; a byte-based cut at 20 would split one.
        let body = "日本語テ".repeat(10);
        let truncated = truncate_body(&body, 7);
        assert_eq!(truncated.chars().count(), 7);
        assert!(body.starts_with(&truncated));
    }

    #[test]
    fn test_format_bodies_is_json_array() {
        let bodies = vec!["first body".to_string(), "second body".to_string()];
        let rendered = format_bodies(&bodies, 6).unwrap();

        let parsed: Vec<String> = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, vec!["first ", "second"]);
    }

    #[test]
    fn test_format_empty_bodies() {
        let rendered = format_bodies(&[], 20).unwrap();
        assert_eq!(rendered, "[]");
    }
}
