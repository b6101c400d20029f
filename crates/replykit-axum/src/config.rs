// Rust guideline compliant 2026-10-12

//! Configuration for envelope finalization.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Placeholder replaced with the request path in the not-found description.
pub const PATH_PLACEHOLDER: &str = "{path}";

/// Configuration for how envelopes are finalized into HTTP responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyConfig {
    /// Whether captured failures and panics include their detail as metadata.
    #[serde(default)]
    pub expose_failure_detail: bool,

    /// Description of the error recorded for envelopes that stay empty.
    #[serde(default = "default_not_found_description")]
    pub not_found_description: String,

    /// Whether response bodies are pretty-printed.
    #[serde(default)]
    pub pretty_json: bool,
}

/// Default not-found description template.
fn default_not_found_description() -> String {
    format!("The requested route '{PATH_PLACEHOLDER}' could not be found")
}

impl Default for ReplyConfig {
    fn default() -> Self {
        Self {
            expose_failure_detail: false,
            not_found_description: default_not_found_description(),
            pretty_json: false,
        }
    }
}

impl ReplyConfig {
    /// Loads configuration from a file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. The TOML file at `path`, if it exists
    /// 3. Environment variables with `REPLYKIT_` prefix
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML config file
    ///
    /// # Returns
    ///
    /// The resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The file contains invalid TOML
    /// - An environment override is malformed
    /// - A value fails validation
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = Self::default();

        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        }

        config.apply_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Applies overrides looked up by variable name.
    ///
    /// Supported variables:
    /// - `REPLYKIT_EXPOSE_FAILURE_DETAIL` - true/false
    /// - `REPLYKIT_NOT_FOUND_DESCRIPTION` - description template
    /// - `REPLYKIT_PRETTY_JSON` - true/false
    ///
    /// # Errors
    ///
    /// Returns an error if a boolean variable is not `true` or `false`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("REPLYKIT_EXPOSE_FAILURE_DETAIL") {
            self.expose_failure_detail = val.parse().map_err(|_| {
                ConfigError::Invalid(
                    "REPLYKIT_EXPOSE_FAILURE_DETAIL must be true or false".to_string(),
                )
            })?;
        }

        if let Some(val) = lookup("REPLYKIT_NOT_FOUND_DESCRIPTION") {
            self.not_found_description = val;
        }

        if let Some(val) = lookup("REPLYKIT_PRETTY_JSON") {
            self.pretty_json = val.parse().map_err(|_| {
                ConfigError::Invalid("REPLYKIT_PRETTY_JSON must be true or false".to_string())
            })?;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if the not-found description is blank.
    pub fn validate(&self) -> Result<()> {
        if self.not_found_description.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "not_found_description cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Saves the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Renders the not-found description for a request path.
    #[must_use]
    pub fn not_found_message(&self, path: &str) -> String {
        self.not_found_description.replace(PATH_PLACEHOLDER, path)
    }
}
