// Rust guideline compliant 2026-10-12

//! Error types for envelope registration.

use crate::entry::EntryKind;
use thiserror::Error;

/// Result type alias for registration operations.
pub type Result<T> = std::result::Result<T, ArgumentError>;

/// Raised when an argument list cannot be classified into an entry.
///
/// These are programmer mistakes at the call site; a deduplicated
/// registration is never reported as an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArgumentError {
    /// No arguments where at least one is required.
    #[error("no arguments passed to {kind} registration")]
    Empty {
        /// Registration kind.
        kind: EntryKind,
    },

    /// A string that could not be assigned to code or description.
    #[error("unknown string argument at position {position} passed to {kind} registration: {value:?}")]
    ExtraString {
        /// Registration kind.
        kind: EntryKind,
        /// Zero-based argument position.
        position: usize,
        /// The offending string.
        value: String,
    },

    /// A structured argument that is neither metadata nor part of a batch.
    #[error("unknown object argument at position {position} passed to {kind} registration: {value}")]
    ExtraRecord {
        /// Registration kind.
        kind: EntryKind,
        /// Zero-based argument position.
        position: usize,
        /// The offending value, rendered as JSON.
        value: String,
    },

    /// An argument of a kind the resolver does not accept in this position.
    #[error("unsupported argument at position {position} passed to {kind} registration: {value}")]
    Unsupported {
        /// Registration kind.
        kind: EntryKind,
        /// Zero-based argument position.
        position: usize,
        /// The offending value, rendered as JSON.
        value: String,
    },

    /// An integer outside the HTTP status range.
    #[error("status argument at position {position} passed to {kind} registration is not a valid HTTP status: {value}")]
    InvalidStatus {
        /// Registration kind.
        kind: EntryKind,
        /// Zero-based argument position.
        position: usize,
        /// The offending value, rendered as JSON.
        value: String,
    },

    /// An options record field holding the wrong JSON type.
    #[error("field `{field}` of options argument at position {position} passed to {kind} registration has the wrong type: {value}")]
    InvalidField {
        /// Registration kind.
        kind: EntryKind,
        /// Zero-based argument position.
        position: usize,
        /// Field name inside the options record.
        field: &'static str,
        /// The offending field value, rendered as JSON.
        value: String,
    },
}

impl ArgumentError {
    /// Returns the position of the offending argument, if one is known.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self {
            ArgumentError::Empty { .. } => None,
            ArgumentError::ExtraString { position, .. }
            | ArgumentError::ExtraRecord { position, .. }
            | ArgumentError::Unsupported { position, .. }
            | ArgumentError::InvalidStatus { position, .. }
            | ArgumentError::InvalidField { position, .. } => Some(*position),
        }
    }
}
