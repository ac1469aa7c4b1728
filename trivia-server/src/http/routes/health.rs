//! Health check endpoint

use std::sync::Arc;

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub status: &'static str,
    pub store: &'static str,
    pub version: &'static str,
}

/// GET /health
///
/// Always 200; `store` reports whether a trivial read went through.
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let store = match state.store.count_questions().await {
        Ok(_) => "ok",
        Err(e) => {
            tracing::warn!("health check read failed: {}", e);
            "unavailable"
        }
    };

    Json(HealthResponse {
        success: true,
        status: "ok",
        store,
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}
