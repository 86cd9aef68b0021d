//! Route modules for the Termscan Server

pub mod flag;
pub mod highlight;
pub mod upload;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Assemble the application router
pub fn app(state: AppState) -> Router {
    // Public, unauthenticated endpoint: every origin, method and header is
    // allowed, and response headers are exposed so browsers can read the
    // found-words summary.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers(Any);

    let max_upload = state.config().max_upload_bytes();

    Router::new()
        .route("/health", get(health_check))
        .route("/highlight-terms/", post(highlight::highlight_terms))
        .route("/flag-terms/", post(flag::flag_terms))
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
