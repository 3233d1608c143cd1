//! Axum route handlers for saved analyses.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::analysis::handlers::report_download;
use crate::errors::{AppError, AppJson};
use crate::models::analysis::AnalysisResult;
use crate::models::saved::SavedAnalysis;
use crate::state::AppState;
use crate::store::saved_at_now;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRequest {
    pub analysis_result: AnalysisResult,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub resume: String,
}

/// GET /api/v1/saved
pub async fn handle_list(State(state): State<AppState>) -> Json<Vec<SavedAnalysis>> {
    Json(state.store.load_all().await)
}

/// POST /api/v1/saved
///
/// Stamps the result with a fresh id and local timestamp and prepends it.
pub async fn handle_save(
    State(state): State<AppState>,
    AppJson(request): AppJson<SaveRequest>,
) -> Result<(StatusCode, Json<SavedAnalysis>), AppError> {
    if request.job_description.trim().is_empty() || request.resume.trim().is_empty() {
        return Err(AppError::Validation(
            "A análise só pode ser salva junto com a vaga e o currículo.".to_string(),
        ));
    }

    let entry = SavedAnalysis {
        id: state.ids.next_id(),
        saved_at: saved_at_now(),
        analysis_result: request.analysis_result,
        job_description: request.job_description,
        resume: request.resume,
    };

    state.store.save(entry.clone()).await?;

    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET /api/v1/saved/:id
///
/// Restores a past analysis together with the inputs that produced it.
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SavedAnalysis>, AppError> {
    find_or_404(&state, &id).await.map(Json)
}

/// DELETE /api/v1/saved/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.store.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/saved/:id/report
pub async fn handle_report(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let saved = find_or_404(&state, &id).await?;
    Ok(report_download(&saved.analysis_result))
}

async fn find_or_404(state: &AppState, id: &str) -> Result<SavedAnalysis, AppError> {
    state
        .store
        .find(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Saved analysis {id} not found")))
}
