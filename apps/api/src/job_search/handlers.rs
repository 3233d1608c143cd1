//! Axum route handlers for the Job Search API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppJson};
use crate::job_search::search_jobs;
use crate::models::job::JobSuggestion;
use crate::state::AppState;

pub const NO_MATCHES_MESSAGE: &str = "Nenhuma vaga compatível foi encontrada no momento. \
    Tente refinar seu currículo e buscar novamente.";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSearchRequest {
    #[serde(default)]
    pub resume: String,
    #[serde(default)]
    pub job_description: String,
}

/// Lets the caller tell "nothing found" apart from a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum JobSearchStatus {
    Found,
    NoMatches,
}

#[derive(Debug, Serialize)]
pub struct JobSearchResponse {
    pub status: JobSearchStatus,
    pub jobs: Vec<JobSuggestion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<Vec<JobSuggestion>> for JobSearchResponse {
    fn from(jobs: Vec<JobSuggestion>) -> Self {
        if jobs.is_empty() {
            Self {
                status: JobSearchStatus::NoMatches,
                jobs,
                message: Some(NO_MATCHES_MESSAGE.to_string()),
            }
        } else {
            Self {
                status: JobSearchStatus::Found,
                jobs,
                message: None,
            }
        }
    }
}

/// POST /api/v1/jobs/search
///
/// Searches the web for open postings matching the résumé.
/// The job description is optional context; the résumé is required.
pub async fn handle_search(
    State(state): State<AppState>,
    AppJson(request): AppJson<JobSearchRequest>,
) -> Result<Json<JobSearchResponse>, AppError> {
    if request.resume.trim().is_empty() {
        return Err(AppError::Validation(
            "Por favor, preencha o seu currículo antes de buscar vagas.".to_string(),
        ));
    }

    let jobs = search_jobs(state.llm.as_ref(), &request.resume, &request.job_description).await?;

    Ok(Json(JobSearchResponse::from(jobs)))
}
