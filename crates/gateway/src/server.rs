use std::{net::SocketAddr, sync::Arc};

use {
    axum::{
        Router,
        response::Json,
        routing::{get, post},
    },
    tower_http::cors::{Any, CorsLayer},
    tracing::info,
};

use gitrelay_events::Dispatcher;

use crate::webhook::github_webhook_handler;

// ── Shared app state ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
}

// ── Server startup ──────────────────────────────────────────────────────────

/// Build the router (shared between production startup and tests).
pub fn build_app(dispatcher: Arc<Dispatcher>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/webhooks/github", post(github_webhook_handler))
        .layer(cors)
        .with_state(AppState { dispatcher })
}

/// Start the HTTP server and serve until the process exits.
pub async fn start_gateway(bind: &str, port: u16, dispatcher: Arc<Dispatcher>) -> anyhow::Result<()> {
    let app = build_app(dispatcher);
    let addr: SocketAddr = format!("{bind}:{port}")
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid bind address {bind}:{port}: {e}"))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "gitrelay listening");
    info!("github webhook URL: /api/webhooks/github");

    axum::serve(listener, app).await?;
    Ok(())
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
