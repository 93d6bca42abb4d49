//! Health check handlers

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::{constants::LIVENESS_MESSAGE, state::AppState};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Plain-text liveness probe
async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}

/// Health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Health routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(liveness))
        .route("/health", get(health_check))
}
