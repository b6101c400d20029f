// Rust guideline compliant 2026-10-12

//! Demonstration routes covering every envelope path.

use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post};
use axum::{Json, Router};
use replykit_axum::{install, Capture, Envelope, Handled, ReplyConfig};
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;

/// Simulated downstream latency for the async routes.
const SIMULATED_LATENCY: Duration = Duration::from_millis(20);

/// Failures of the simulated downstream store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store did not answer.
    #[error("order store is unavailable")]
    Unavailable,
}

/// Builds the demonstration router with envelope handling installed.
pub fn router(config: ReplyConfig) -> Router {
    let routes = Router::new()
        .route("/", get(root))
        .route("/echo", post(echo))
        .route("/register", post(register))
        .route("/handled-error", get(handled_error))
        .route("/unhandled-error", get(unhandled_error))
        .route("/mixed-error-unhandled", get(mixed_error_unhandled))
        .route("/mixed-error-response", get(mixed_error_response))
        .route("/success-nested", get(success_nested))
        .route("/success-async", get(success_async))
        .route("/error-async", get(error_async))
        .route("/panic", get(panics));
    install(routes, config)
}

async fn root(mut envelope: Envelope) -> Envelope {
    envelope.set_result("ok");
    envelope
}

async fn echo(mut envelope: Envelope, body: Result<Json<Value>, JsonRejection>) -> Envelope {
    match body {
        Ok(Json(body)) => {
            envelope.results(body);
            envelope.information("just echos back the request body as the result");
        }
        Err(rejection) => {
            envelope.error_bad_request(rejection.body_text().as_str());
        }
    }
    envelope
}

/// Argument lists for runtime registration.
#[derive(Debug, Default, Deserialize)]
struct Registrations {
    #[serde(default)]
    errors: Vec<Vec<Value>>,
    #[serde(default)]
    info: Vec<Vec<Value>>,
}

async fn register(
    mut envelope: Envelope,
    body: Result<Json<Registrations>, JsonRejection>,
) -> Envelope {
    let registrations = match body {
        Ok(Json(registrations)) => registrations,
        Err(rejection) => {
            envelope.error_bad_request(rejection.body_text().as_str());
            return envelope;
        }
    };

    let mut accepted = 0usize;
    for args in &registrations.errors {
        match envelope.try_error(args) {
            Ok(_) => accepted += 1,
            Err(err) => {
                envelope.error_bad_request(err.to_string().as_str());
            }
        }
    }
    for args in &registrations.info {
        match envelope.try_information(args) {
            Ok(_) => accepted += 1,
            Err(err) => {
                envelope.error_bad_request(err.to_string().as_str());
            }
        }
    }
    envelope.set_result(json!({ "accepted": accepted }));
    envelope
}

async fn handled_error(mut envelope: Envelope) -> Envelope {
    if let Err(err) = lookup_order(false).await {
        envelope.error_internal_server_error(err.to_string().as_str());
    }
    envelope
}

async fn unhandled_error(mut envelope: Envelope) -> Handled {
    Err(envelope.abort(anyhow::anyhow!("oops, i did not handle this error")))
}

async fn mixed_error_unhandled(mut envelope: Envelope) -> Handled {
    envelope.results("a result");
    envelope.error_bad_request("request body missing foo");
    envelope.error_bad_request("request body missing bar");
    Err(envelope.abort(anyhow::anyhow!("oops, i did not handle this error")))
}

async fn mixed_error_response(mut envelope: Envelope) -> Envelope {
    envelope.results("a result");
    envelope.error_bad_request("request body missing foo");
    envelope.error_bad_request("request body missing bar");
    envelope
}

fn register_nested_info(envelope: &mut Envelope) {
    envelope.results(json!({ "a": 1, "b": 2, "c": 3 }));
    let a = envelope.information("info A");
    a.information("info A: child info 1");
    a.information("info A: child info 2");
    a.information("info A: child info 3");
    envelope
        .information("info B")
        .information("info B: child info 1");
}

async fn success_nested(mut envelope: Envelope) -> Envelope {
    register_nested_info(&mut envelope);
    envelope
}

async fn success_async(mut envelope: Envelope) -> Handled {
    register_nested_info(&mut envelope);
    lookup_order(true).await.capture(&mut envelope)?;
    Ok(envelope)
}

async fn error_async(mut envelope: Envelope) -> Handled {
    register_nested_info(&mut envelope);
    lookup_order(false).await.capture(&mut envelope)?;
    Ok(envelope)
}

async fn panics(_envelope: Envelope) -> Envelope {
    panic!("demo handler panicked")
}

async fn lookup_order(available: bool) -> Result<(), StoreError> {
    tokio::time::sleep(SIMULATED_LATENCY).await;
    if available {
        Ok(())
    } else {
        Err(StoreError::Unavailable)
    }
}
