// crates/server/src/lib.rs
//! icd-tagger server library.
//!
//! Axum-based HTTP server for the ICD-10 condition classifier. Serves the
//! upload/classify/download API plus the embedded single-page UI.

pub mod classify_state;
pub mod error;
pub mod routes;
pub mod state;

pub use error::*;
pub use routes::api_routes;
pub use state::AppState;

use axum::{response::Html, routing::get, Router};
use icd_tagger_core::llm::{ClassifierConfig, CompletionProvider};
use icd_tagger_core::BatchClassifier;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Embedded single-page UI: upload control, status narrative, results
/// table, download button.
const INDEX_HTML: &str = include_str!("../assets/index.html");

/// GET / - Serve the embedded page.
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Create the Axum application with all routes and middleware.
///
/// This sets up:
/// - The embedded UI at `/`
/// - API routes (health, classify, status, download)
/// - CORS for development (allows any origin)
/// - Request tracing
pub fn create_app(config: ClassifierConfig, provider: Box<dyn CompletionProvider>) -> Router {
    let classifier = BatchClassifier::new(config, provider);
    let state = AppState::new(classifier);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .merge(api_routes(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ============================================================================
// Integration Tests
// ============================================================================
