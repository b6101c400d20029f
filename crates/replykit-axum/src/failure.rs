// Rust guideline compliant 2026-10-12

//! Handler failures that still produce an envelope.

use crate::envelope::Envelope;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use replykit_core::{DedupPolicy, Entry, Preset};
use serde_json::json;

/// Return type for envelope handlers.
pub type Handled = Result<Envelope, Aborted>;

/// A handler that stopped early with an error.
///
/// Carries everything the handler registered before failing. When rendered,
/// the error is appended as one more error entry and the envelope is
/// finalized as usual.
#[derive(Debug)]
pub struct Aborted {
    envelope: Envelope,
    error: anyhow::Error,
    status: Option<StatusCode>,
}

impl Aborted {
    /// Wraps an error together with the envelope it interrupted.
    pub fn new(envelope: Envelope, error: impl Into<anyhow::Error>) -> Self {
        Self {
            envelope,
            error: error.into(),
            status: None,
        }
    }

    /// Records the failure with `status` instead of 500.
    ///
    /// The entry code becomes the status' canonical reason phrase.
    #[must_use]
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns the underlying error.
    pub fn error(&self) -> &anyhow::Error {
        &self.error
    }

    /// Appends the failure to the envelope and returns it.
    #[must_use]
    pub fn into_envelope(self) -> Envelope {
        let Aborted {
            mut envelope,
            error,
            status,
        } = self;

        tracing::warn!(
            path = envelope.path(),
            error = %error,
            "handler aborted"
        );

        let message = error.to_string();
        let description = Some(message.as_str()).filter(|message| !message.is_empty());
        let detail = envelope.config().expose_failure_detail.then(|| {
            json!({
                "causes": error.chain().skip(1).map(ToString::to_string).collect::<Vec<_>>(),
            })
        });

        match status {
            None => {
                envelope.error_preset(Preset::InternalServerError, description, detail);
            }
            Some(status) => {
                let reason = status.canonical_reason().unwrap_or("Error");
                let mut entry = Entry::new()
                    .status(status.as_u16())
                    .code(reason)
                    .description(description.unwrap_or(reason));
                entry.metadata = detail;
                envelope.insert_error(entry, DedupPolicy::DescriptionOnly);
            }
        }

        envelope
    }
}

impl IntoResponse for Aborted {
    fn into_response(self) -> Response {
        self.into_envelope().into_response()
    }
}

impl Envelope {
    /// Stops the handler with `error`, keeping what was registered so far.
    ///
    /// ```ignore
    /// return Err(envelope.abort(anyhow::anyhow!("inventory unavailable")));
    /// ```
    pub fn abort(&mut self, error: impl Into<anyhow::Error>) -> Aborted {
        Aborted::new(self.take(), error)
    }
}

/// Converts a failed `Result` into [`Aborted`] so `?` works in handlers.
pub trait Capture<T> {
    /// Returns the success value, or moves the envelope into [`Aborted`].
    ///
    /// # Errors
    ///
    /// Returns [`Aborted`] carrying the envelope when `self` is an error.
    fn capture(self, envelope: &mut Envelope) -> Result<T, Aborted>;
}

impl<T, E> Capture<T> for Result<T, E>
where
    E: Into<anyhow::Error>,
{
    fn capture(self, envelope: &mut Envelope) -> Result<T, Aborted> {
        self.map_err(|error| envelope.abort(error))
    }
}
