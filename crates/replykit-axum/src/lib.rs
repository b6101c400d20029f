// Rust guideline compliant 2026-10-12

//! Axum integration for replykit envelopes.
//!
//! One [`Envelope`] is extracted per request, mutated by the handler, and
//! finalized into the HTTP response: status from the aggregate status, body
//! from the serialized envelope, 404 when nothing was registered. Handler
//! errors propagated through [`Capture`] and panics are recorded as
//! internal-server-error entries.

pub mod config;
pub mod envelope;
pub mod error;
pub mod failure;
pub mod layer;

pub use config::ReplyConfig;
pub use envelope::Envelope;
pub use error::{ConfigError, Result};
pub use failure::{Aborted, Capture, Handled};
pub use layer::install;
