// Rust guideline compliant 2026-10-12

//! The per-request envelope and its finalization.

use crate::config::ReplyConfig;
use axum::async_trait;
use axum::extract::{FromRequestParts, OriginalUri};
use axum::http::request::Parts;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use replykit_core::ResponseNode;
use std::convert::Infallible;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// A response envelope owned by one request.
///
/// Extracted at the start of a handler, mutated through [`ResponseNode`]'s
/// methods (via `Deref`), and finalized when returned from the handler.
#[derive(Debug, Clone)]
pub struct Envelope {
    node: ResponseNode,
    path: String,
    config: Arc<ReplyConfig>,
}

impl Envelope {
    /// Creates an empty envelope for the given request path.
    #[must_use]
    pub fn new(path: impl Into<String>, config: Arc<ReplyConfig>) -> Self {
        Self {
            node: ResponseNode::new(),
            path: path.into(),
            config,
        }
    }

    /// Returns the request path the envelope was created for.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ReplyConfig {
        &self.config
    }

    /// Consumes the envelope and returns the underlying node.
    #[must_use]
    pub fn into_node(self) -> ResponseNode {
        self.node
    }

    /// Moves the contents out, leaving an empty envelope for the same request.
    pub(crate) fn take(&mut self) -> Envelope {
        Envelope {
            node: std::mem::take(&mut self.node),
            path: self.path.clone(),
            config: Arc::clone(&self.config),
        }
    }

    /// Computes the HTTP status and the final body.
    ///
    /// An envelope with no errors, no info and no result gets a 404 error
    /// described by the configured not-found template. Aggregate statuses
    /// outside the HTTP range become 500.
    #[must_use]
    pub fn finalize(mut self) -> (StatusCode, ResponseNode) {
        if self.node.is_empty() {
            let message = self.config.not_found_message(&self.path);
            self.node.error_not_found(message.as_str());
        }

        let aggregate = self.node.status_code();
        let status = StatusCode::from_u16(aggregate).unwrap_or_else(|_| {
            tracing::warn!(
                path = %self.path,
                status = aggregate,
                "aggregate status is not a valid HTTP status, using 500"
            );
            StatusCode::INTERNAL_SERVER_ERROR
        });
        (status, self.node)
    }
}

impl Deref for Envelope {
    type Target = ResponseNode;

    fn deref(&self) -> &Self::Target {
        &self.node
    }
}

impl DerefMut for Envelope {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.node
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Envelope
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let path = parts
            .extensions
            .get::<OriginalUri>()
            .map(|uri| uri.0.path().to_string())
            .unwrap_or_else(|| parts.uri.path().to_string());
        let config = parts
            .extensions
            .get::<Arc<ReplyConfig>>()
            .cloned()
            .unwrap_or_default();
        Ok(Envelope::new(path, config))
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        let pretty = self.config.pretty_json;
        let path = self.path.clone();
        let (status, node) = self.finalize();
        tracing::debug!(
            %path,
            status = status.as_u16(),
            errors = node.errors().len(),
            info = node.info().len(),
            "finalized envelope"
        );
        render(status, &node, pretty)
    }
}

/// Writes a node as a JSON response body.
pub(crate) fn render(status: StatusCode, node: &ResponseNode, pretty: bool) -> Response {
    let body = if pretty {
        node.to_json_pretty()
    } else {
        node.to_json()
    };
    match body {
        Ok(body) => (status, [(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to serialize envelope");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope() -> Envelope {
        Envelope::new("/orders/7", Arc::new(ReplyConfig::default()))
    }

    #[test]
    fn test_empty_envelope_finalizes_to_not_found() {
        let (status, node) = envelope().finalize();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(node.errors().len(), 1);
        assert_eq!(node.errors()[0].code(), Some("Not Found"));
        assert_eq!(
            node.errors()[0].description(),
            Some("The requested route '/orders/7' could not be found")
        );
    }

    #[test]
    fn test_info_only_envelope_is_success() {
        let mut envelope = envelope();
        envelope.information("nothing to do");
        let (status, node) = envelope.finalize();
        assert_eq!(status, StatusCode::OK);
        assert!(!node.has_error());
    }

    #[test]
    fn test_status_is_aggregate() {
        let mut envelope = envelope();
        envelope.set_result("partial");
        envelope.error_bad_request("missing foo");
        let (status, _) = envelope.finalize();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_aggregate_falls_back_to_500() {
        let mut envelope = envelope();
        envelope.error((1000u16, "odd status"));
        let (status, node) = envelope.finalize();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(node.status_code(), 1000);
    }

    #[test]
    fn test_take_leaves_empty_envelope_for_same_path() {
        let mut envelope = envelope();
        envelope.information("kept");
        let taken = envelope.take();
        assert!(envelope.is_empty());
        assert_eq!(envelope.path(), "/orders/7");
        assert!(taken.has_info());
    }
}
