// Rust guideline compliant 2026-10-12

//! Router wiring: config extension, unmatched routes, panics and tracing.

use crate::config::ReplyConfig;
use crate::envelope::{render, Envelope};
use axum::body::Body;
use axum::http::{header, StatusCode};
use axum::middleware::map_response;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Router};
use replykit_core::{Preset, ResponseNode};
use serde_json::json;
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic};
use tower_http::trace::TraceLayer;

/// Installs envelope handling on a router.
///
/// Adds, in order from the inside out:
/// - a fallback that answers unmatched routes with a 404 envelope
/// - a rewrite of axum's bare 405 into a method-not-allowed envelope
/// - panic recovery that answers with a 500 envelope
/// - the [`ReplyConfig`] extension read by the [`Envelope`] extractor
/// - request tracing
///
/// Call after all routes have been added.
pub fn install<S>(router: Router<S>, config: ReplyConfig) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let config = Arc::new(config);
    router
        .fallback(unmatched)
        .layer(map_response(method_mismatch))
        .layer(CatchPanicLayer::custom(PanicResponder {
            config: Arc::clone(&config),
        }))
        .layer(Extension(config))
        .layer(TraceLayer::new_for_http())
}

async fn unmatched(envelope: Envelope) -> Envelope {
    envelope
}

/// Replaces the empty 405 axum sends when a path matches but its method
/// does not. Responses that already carry a body type pass through.
async fn method_mismatch(mut envelope: Envelope, response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED
        || response.headers().contains_key(header::CONTENT_TYPE)
    {
        return response;
    }

    envelope.error_method_not_allowed(None);
    let mut rendered = envelope.into_response();
    if let Some(allow) = response.headers().get(header::ALLOW) {
        rendered.headers_mut().insert(header::ALLOW, allow.clone());
    }
    rendered
}

/// Renders a caught panic as an envelope with one internal-server-error entry.
#[derive(Debug, Clone)]
struct PanicResponder {
    config: Arc<ReplyConfig>,
}

impl ResponseForPanic for PanicResponder {
    type ResponseBody = Body;

    fn response_for_panic(&mut self, err: Box<dyn Any + Send + 'static>) -> Response {
        let message = panic_message(err.as_ref());
        tracing::error!(panic = %message, "handler panicked");

        let detail = self
            .config
            .expose_failure_detail
            .then(|| json!({ "panic": message }));
        let mut node = ResponseNode::new();
        node.error_preset(Preset::InternalServerError, None, detail);
        render(
            StatusCode::INTERNAL_SERVER_ERROR,
            &node,
            self.config.pretty_json,
        )
    }
}

fn panic_message(err: &(dyn Any + Send)) -> String {
    if let Some(message) = err.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
