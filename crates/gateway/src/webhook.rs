//! GitHub webhook intake.

use {
    axum::{
        extract::State,
        http::{HeaderMap, StatusCode},
        response::Json,
    },
    serde_json::{Value, json},
    tracing::{info, warn},
};

use crate::server::AppState;

/// Handle `POST /api/webhooks/github`.
///
/// The event type comes from the `X-GitHub-Event` header; a missing header
/// is treated as an unknown event (accepted, ignored). Any dispatch failure
/// maps to a generic 500 with no cause detail leaked to the sender.
pub async fn github_webhook_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let event_type = headers
        .get("x-github-event")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    info!(event = %event_type, "received github event");

    match state.dispatcher.dispatch(event_type, payload).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "success": true }))),
        Err(e) => {
            warn!(event = %event_type, error = %e, "webhook dispatch failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "internal server error" })),
            )
        },
    }
}
