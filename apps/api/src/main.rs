mod config;
mod errors;
mod jobs;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::jobs::aggregator::Aggregator;
use crate::jobs::embedding::StaticEmbedder;
use crate::jobs::matcher::JobMatcher;
use crate::jobs::scorer::RelevanceScorer;
use crate::jobs::sources::build_sources;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobMatch API v{}", env!("CARGO_PKG_VERSION"));

    if config.adzuna.is_none() {
        warn!("ADZUNA_APP_ID / ADZUNA_API_KEY not set; Adzuna results disabled");
    }
    if config.jsearch_api_key.is_none() {
        warn!("JSEARCH_API_KEY not set; JSearch results disabled");
    }

    // Shared HTTP client for all providers; the timeout bounds each provider call
    let http = reqwest::Client::builder()
        .timeout(config.http_timeout)
        .build()
        .context("Failed to build HTTP client")?;
    let aggregator = Aggregator::new(build_sources(&config, http));

    // Load the embedding model once; it is read-only for the life of the process
    let embedder = StaticEmbedder::load().await?;
    let scorer = RelevanceScorer::new(Arc::new(embedder), config.embedding_timeout);

    let state = AppState {
        matcher: Arc::new(JobMatcher::new(aggregator, scorer)),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
