// Rust guideline compliant 2026-10-12

//! Summaries of serialized envelopes.

use replykit_core::ResponseNode;
use serde::Serialize;
use std::fmt;

/// Top-level facts about an envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Aggregate status.
    pub status: u16,
    /// Number of top-level errors.
    pub errors: usize,
    /// Number of top-level info records.
    pub info: usize,
    /// Whether a result is present.
    pub has_result: bool,
}

impl Summary {
    /// Summarizes a parsed envelope.
    #[must_use]
    pub fn of(node: &ResponseNode) -> Self {
        Self {
            status: node.status_code(),
            errors: node.errors().len(),
            info: node.info().len(),
            has_result: node.has_result(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "status: {}", self.status)?;
        writeln!(f, "errors: {}", self.errors)?;
        writeln!(f, "info:   {}", self.info)?;
        write!(f, "result: {}", if self.has_result { "yes" } else { "no" })
    }
}

/// Parses an envelope from JSON and summarizes it.
///
/// # Errors
///
/// Returns an error if `json` is not a valid envelope.
pub fn summarize(json: &str) -> Result<Summary, serde_json::Error> {
    let node = ResponseNode::from_json(json)?;
    Ok(Summary::of(&node))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_uses_immediate_errors() {
        let summary = summarize(
            r#"{"errors":[{"status":400,"errors":[{"status":503}]}],"info":[{"desc":"x"}],"result":1}"#,
        )
        .unwrap();
        assert_eq!(
            summary,
            Summary {
                status: 400,
                errors: 1,
                info: 1,
                has_result: true,
            }
        );
    }

    #[test]
    fn test_summarize_rejects_garbage() {
        assert!(summarize("[1, 2]").is_err());
    }
}
