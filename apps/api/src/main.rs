mod analysis;
mod config;
mod errors;
mod ingest;
mod job_search;
mod llm_client;
mod models;
mod routes;
mod state;
mod store;

#[cfg(test)]
mod test_support;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::ingest::{DocumentExtractor, TesseractCli};
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{AnalysisRepository, IdGenerator, JsonFileStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Fit API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = GeminiClient::new(&config);
    info!(
        "LLM client initialized (analysis model: {}, search model: {})",
        llm.analysis_model(),
        llm.search_model()
    );

    // Saved analyses
    let store = JsonFileStore::new(config.store_path.clone());
    let ids = IdGenerator::seeded_from(&store.load_all().await);
    info!("Saved analyses stored at {}", store.path().display());

    // Document ingestion (OCR via tesseract)
    let extractor = DocumentExtractor::new(Arc::new(TesseractCli::new(
        config.tesseract_path.clone(),
    )));
    info!("OCR binary: {}", config.tesseract_path);

    // Build app state
    let state = AppState {
        llm: Arc::new(llm),
        store: Arc::new(store),
        ids: Arc::new(ids),
        extractor,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // the single-page app is served from another origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
