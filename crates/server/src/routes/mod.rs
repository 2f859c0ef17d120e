//! API route handlers for the icd-tagger server.

pub mod classify;
pub mod download;
pub mod health;

use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

/// Create the combined API router with all routes under /api prefix.
///
/// Routes:
/// - GET  /api/health - Health check
/// - POST /api/classify - Upload a CSV and classify every row
/// - GET  /api/classify/status - Progress of the current run
/// - GET  /api/download - Download the enriched CSV
pub fn api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", health::router())
        .nest("/api", classify::router())
        .nest("/api", download::router())
        .with_state(state)
}
