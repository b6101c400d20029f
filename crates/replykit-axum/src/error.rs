// Rust guideline compliant 2026-10-12

//! Error handling for the axum integration.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while loading or saving [`crate::ReplyConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error while reading or writing the config file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for this schema.
    #[error("Invalid config file {path}: {message}")]
    Parse {
        /// Path of the offending file.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// The config could not be rendered as TOML.
    #[error("Failed to serialize config: {0}")]
    Serialize(String),

    /// A value failed validation or an environment override was malformed.
    #[error("Invalid config value: {0}")]
    Invalid(String),
}
