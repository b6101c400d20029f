// Rust guideline compliant 2026-10-12

//! Fixed error presets behind the convenience constructors.

use crate::entry::Entry;
use serde_json::Value;

/// A common HTTP failure with a fixed status, code and default description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// 400.
    BadRequest,
    /// 403.
    Forbidden,
    /// 404.
    NotFound,
    /// 405.
    MethodNotAllowed,
    /// 425.
    TooEarly,
    /// 500.
    InternalServerError,
    /// 504.
    GatewayTimeout,
}

impl Preset {
    /// All presets in status order.
    pub const ALL: [Preset; 7] = [
        Preset::BadRequest,
        Preset::Forbidden,
        Preset::NotFound,
        Preset::MethodNotAllowed,
        Preset::TooEarly,
        Preset::InternalServerError,
        Preset::GatewayTimeout,
    ];

    /// Returns the HTTP status.
    #[must_use]
    pub const fn status(self) -> u16 {
        match self {
            Preset::BadRequest => 400,
            Preset::Forbidden => 403,
            Preset::NotFound => 404,
            Preset::MethodNotAllowed => 405,
            Preset::TooEarly => 425,
            Preset::InternalServerError => 500,
            Preset::GatewayTimeout => 504,
        }
    }

    /// Returns the code shared by every entry of this preset.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Preset::BadRequest => "Bad Request",
            Preset::Forbidden => "Forbidden",
            Preset::NotFound => "Not Found",
            Preset::MethodNotAllowed => "Method Not Allowed",
            Preset::TooEarly => "Too Early",
            Preset::InternalServerError => "Internal Server Error",
            Preset::GatewayTimeout => "Gateway Timeout",
        }
    }

    /// Returns the description used when the caller supplies none.
    #[must_use]
    pub const fn default_description(self) -> &'static str {
        match self {
            Preset::BadRequest => "the request body was missing or malformed",
            Preset::Forbidden => "the requested data is access-protected and that the request cannot be performed due to the client not having authority.",
            Preset::NotFound => "the requested resource could not be found",
            Preset::MethodNotAllowed => "the request method is known to the server but has been disabled and cannot be used",
            Preset::TooEarly => "api or internal dependency is still initializing",
            Preset::InternalServerError => "an internal API state was unexpected",
            Preset::GatewayTimeout => "an internal service took too long to respond",
        }
    }

    /// Builds the entry for this preset.
    ///
    /// An empty description counts as absent and falls back to the default.
    #[must_use]
    pub fn entry(self, description: Option<&str>, metadata: Option<Value>) -> Entry {
        let description = description
            .filter(|desc| !desc.is_empty())
            .unwrap_or(self.default_description());
        Entry {
            status: Some(self.status()),
            code: Some(self.code().to_string()),
            description: Some(description.to_string()),
            metadata,
        }
    }
}
