// crates/server/src/main.rs
//! icd-tagger server binary.
//!
//! Reads the completion credential from the environment, builds the app,
//! and serves it on localhost.

use std::net::SocketAddr;

use anyhow::Result;
use icd_tagger_core::llm::{ClassifierConfig, TogetherProvider};
use icd_tagger_server::create_app;
use tracing_subscriber::EnvFilter;

/// Default port for the server.
const DEFAULT_PORT: u16 = 47311;

/// Get the server port from environment or use default.
fn get_port() -> u16 {
    std::env::var("ICD_TAGGER_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    eprintln!("\n\u{1f3e5} icd-tagger v{}\n", env!("CARGO_PKG_VERSION"));

    let config = ClassifierConfig::from_env();
    if config.api_key.is_none() {
        tracing::warn!("API_KEY not set; classification requests will fail");
    }

    let provider = Box::new(TogetherProvider::from_config(&config));
    let app = create_app(config, provider);

    let port = get_port();
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    eprintln!("  \u{2192} http://localhost:{}\n", port);

    axum::serve(listener, app).await?;

    Ok(())
}
