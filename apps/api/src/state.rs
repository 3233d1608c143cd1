use std::sync::Arc;

use crate::ingest::DocumentExtractor;
use crate::llm_client::LlmBackend;
use crate::store::{AnalysisRepository, IdGenerator};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Gemini in production; scripted in tests.
    pub llm: Arc<dyn LlmBackend>,
    /// Saved analyses. Default: `JsonFileStore` at `STORE_PATH`.
    pub store: Arc<dyn AnalysisRepository>,
    pub ids: Arc<IdGenerator>,
    pub extractor: DocumentExtractor,
}
