mod compliance;
mod config;
mod errors;
mod extraction;
mod routes;
mod state;


use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extraction::DocumentExtractor;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; bad overrides stop startup
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting doccheck API v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Compliance rules: sections={:?}, words={}..={}, pass threshold {}%",
        config.rules.required_sections,
        config.rules.min_words,
        config.rules.max_words,
        config.rules.pass_threshold
    );

    let state = AppState {
        config: config.clone(),
        extractor: Arc::new(DocumentExtractor),
    };

    // Same nesting as ServiceBuilder (CORS outermost, trace inside), applied as
    // separate router layers so axum re-boxes the body between them.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
