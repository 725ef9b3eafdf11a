//! Health HTTP Routes
//!
//! Liveness endpoints.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use super::book_routes::BookState;

/// Plain-text body served at `/`
pub const LIVENESS_TEXT: &str = "It's working!";

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub books: usize,
}

/// Create health routes
pub fn health_routes(state: Arc<BookState>) -> Router {
    Router::new()
        .route("/", get(liveness_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

async fn liveness_handler() -> &'static str {
    LIVENESS_TEXT
}

async fn health_handler(State(state): State<Arc<BookState>>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        books: state.count().await,
    };

    (StatusCode::OK, Json(response))
}
