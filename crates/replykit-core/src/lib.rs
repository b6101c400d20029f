// Rust guideline compliant 2026-10-12

//! Replykit Core Library
//!
//! This crate provides the response envelope data model:
//! - Recursive response nodes (result, nested errors, nested info)
//! - Argument resolution for typed and JSON-shaped registration calls
//! - Dedup-aware insertion of error and info records
//! - Status aggregation and wire serialization
//! - Common HTTP error presets

pub mod entry;
pub mod error;
pub mod node;
pub mod preset;
pub mod resolve;

pub use entry::{Entry, EntryKind};
pub use error::{ArgumentError, Result};
pub use node::{DedupPolicy, ResponseNode, DEFAULT_ERROR_STATUS, DEFAULT_SUCCESS_STATUS};
pub use preset::Preset;
pub use resolve::{resolve, Resolution};
