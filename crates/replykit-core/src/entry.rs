// Rust guideline compliant 2026-10-12

//! Normalized registration tuples and their typed constructors.
//!
//! Every accepted call shape converts into an [`Entry`] through `From`, so the
//! classification rules are fixed at compile time:
//!
//! | argument shape | status | code | description | metadata |
//! |---|---|---|---|---|
//! | `&str` / `String` | | | 1st | |
//! | `u16` | 1st | | | |
//! | `(u16, &str)` | 1st | | 2nd | |
//! | `(&str, &str)` | | 1st | 2nd | |
//! | `(u16, &str, &str)` | 1st | 2nd | 3rd | |
//! | `(&str, Value)` | | | 1st | 2nd |
//! | `(u16, &str, Value)` | 1st | | 2nd | 3rd |
//! | `(&str, &str, Value)` | | 1st | 2nd | 3rd |
//! | `(u16, &str, &str, Value)` | 1st | 2nd | 3rd | 4th |
//!
//! The two- and three-element string shapes and `(&str, Value)` also accept
//! owned `String`s, so `format!` output can be passed directly.
//!
//! An [`Entry`] built with its setters plays the role of an options record.

use serde_json::Value;
use std::fmt;

/// Which child list a registration targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Failure records; aggregated into the status code.
    Error,
    /// Non-fatal notices.
    Info,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Error => f.write_str("error"),
            EntryKind::Info => f.write_str("information"),
        }
    }
}

/// A normalized `(status, code, description, metadata)` tuple.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entry {
    /// HTTP-style status.
    pub status: Option<u16>,
    /// Stable identifier used for dedup.
    pub code: Option<String>,
    /// Human-readable text; dedup fallback.
    pub description: Option<String>,
    /// Caller-attached data.
    pub metadata: Option<Value>,
}

impl Entry {
    /// Creates an empty entry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the status.
    #[must_use]
    pub fn status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the code.
    #[must_use]
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the metadata.
    #[must_use]
    pub fn metadata(mut self, metadata: Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Returns the code when it is present and non-empty.
    pub(crate) fn dedup_code(&self) -> Option<&str> {
        self.code.as_deref().filter(|code| !code.is_empty())
    }

    /// Returns the description when it is present and non-empty.
    pub(crate) fn dedup_description(&self) -> Option<&str> {
        self.description.as_deref().filter(|desc| !desc.is_empty())
    }
}

impl From<&str> for Entry {
    fn from(description: &str) -> Self {
        Entry::new().description(description)
    }
}

impl From<String> for Entry {
    fn from(description: String) -> Self {
        Entry::new().description(description)
    }
}

impl From<&String> for Entry {
    fn from(description: &String) -> Self {
        Entry::new().description(description.as_str())
    }
}

impl From<u16> for Entry {
    fn from(status: u16) -> Self {
        Entry::new().status(status)
    }
}

impl From<(u16, &str)> for Entry {
    fn from((status, description): (u16, &str)) -> Self {
        Entry::new().status(status).description(description)
    }
}

// Exactly two strings: the first is the code.
impl From<(&str, &str)> for Entry {
    fn from((code, description): (&str, &str)) -> Self {
        Entry::new().code(code).description(description)
    }
}

impl From<(u16, &str, &str)> for Entry {
    fn from((status, code, description): (u16, &str, &str)) -> Self {
        Entry::new().status(status).code(code).description(description)
    }
}

impl From<(&str, Value)> for Entry {
    fn from((description, metadata): (&str, Value)) -> Self {
        Entry::new().description(description).metadata(metadata)
    }
}

impl From<(u16, &str, Value)> for Entry {
    fn from((status, description, metadata): (u16, &str, Value)) -> Self {
        Entry::new()
            .status(status)
            .description(description)
            .metadata(metadata)
    }
}

impl From<(&str, &str, Value)> for Entry {
    fn from((code, description, metadata): (&str, &str, Value)) -> Self {
        Entry::new()
            .code(code)
            .description(description)
            .metadata(metadata)
    }
}

impl From<(u16, &str, &str, Value)> for Entry {
    fn from((status, code, description, metadata): (u16, &str, &str, Value)) -> Self {
        Entry::new()
            .status(status)
            .code(code)
            .description(description)
            .metadata(metadata)
    }
}

impl From<(u16, String)> for Entry {
    fn from((status, description): (u16, String)) -> Self {
        Entry::new().status(status).description(description)
    }
}

impl From<(String, String)> for Entry {
    fn from((code, description): (String, String)) -> Self {
        Entry::new().code(code).description(description)
    }
}

impl From<(u16, String, String)> for Entry {
    fn from((status, code, description): (u16, String, String)) -> Self {
        Entry::new().status(status).code(code).description(description)
    }
}

impl From<(u16, &str, String)> for Entry {
    fn from((status, code, description): (u16, &str, String)) -> Self {
        Entry::new().status(status).code(code).description(description)
    }
}

impl From<(String, Value)> for Entry {
    fn from((description, metadata): (String, Value)) -> Self {
        Entry::new().description(description).metadata(metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_two_strings_are_code_then_description() {
        let entry = Entry::from(("INFO_01", "an informative description"));
        assert_eq!(entry.code.as_deref(), Some("INFO_01"));
        assert_eq!(
            entry.description.as_deref(),
            Some("an informative description")
        );
        assert_eq!(entry.status, None);
    }

    #[test]
    fn test_status_and_single_string_is_description() {
        let entry = Entry::from((400, "an error"));
        assert_eq!(entry.status, Some(400));
        assert_eq!(entry.code, None);
        assert_eq!(entry.description.as_deref(), Some("an error"));
    }

    #[test]
    fn test_description_with_metadata() {
        let entry = Entry::from(("an info description", json!({ "app": "myApp" })));
        assert_eq!(entry.description.as_deref(), Some("an info description"));
        assert_eq!(entry.metadata, Some(json!({ "app": "myApp" })));
    }

    #[test]
    fn test_owned_strings_follow_borrowed_rules() {
        let sku = "A-1";
        let entry = Entry::from((404, format!("order {sku} not found")));
        assert_eq!(entry.status, Some(404));
        assert_eq!(entry.description.as_deref(), Some("order A-1 not found"));

        let entry = Entry::from((409, "CONFLICT", format!("{sku} already exists")));
        assert_eq!(entry.code.as_deref(), Some("CONFLICT"));
        assert_eq!(entry.description.as_deref(), Some("A-1 already exists"));

        let entry = Entry::from((String::from("INFO_01"), format!("{sku} queued")));
        assert_eq!(entry, Entry::from(("INFO_01", "A-1 queued")));
    }

    #[test]
    fn test_empty_strings_do_not_participate_in_dedup() {
        let entry = Entry::new().code("").description("");
        assert_eq!(entry.dedup_code(), None);
        assert_eq!(entry.dedup_description(), None);
    }
}
