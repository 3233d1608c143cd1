//! Axum route handlers for the Analysis API.

use axum::{extract::State, http::header, response::IntoResponse, Json};
use serde::Deserialize;

use crate::analysis::analyze_resume;
use crate::analysis::report::{render_report, REPORT_FILE_NAME};
use crate::errors::{AppError, AppJson};
use crate::models::analysis::AnalysisResult;
use crate::state::AppState;

pub const MISSING_INPUTS_MESSAGE: &str =
    "Por favor, preencha a descrição da vaga e o seu currículo.";

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub resume: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub analysis_result: AnalysisResult,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analysis
///
/// Scores the résumé against the job description and returns the full result.
pub async fn handle_analyze(
    State(state): State<AppState>,
    AppJson(request): AppJson<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    if request.job_description.trim().is_empty() || request.resume.trim().is_empty() {
        return Err(AppError::Validation(MISSING_INPUTS_MESSAGE.to_string()));
    }

    let result = analyze_resume(
        state.llm.as_ref(),
        &request.job_description,
        &request.resume,
    )
    .await?;

    Ok(Json(result))
}

/// POST /api/v1/analysis/report
///
/// Renders the downloadable plain-text report for a result the caller holds.
pub async fn handle_report(AppJson(request): AppJson<ReportRequest>) -> impl IntoResponse {
    report_download(&request.analysis_result)
}

/// Wraps a rendered report as a `text/plain` attachment.
pub fn report_download(result: &AnalysisResult) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{REPORT_FILE_NAME}\""),
            ),
        ],
        render_report(result),
    )
}
