//! Job search: a search-tool-augmented LLM call whose free-text reply is
//! tokenized into `JobSuggestion`s.
//! All LLM calls go through llm_client; no direct Gemini calls here.

pub mod handlers;
pub mod parser;
pub mod prompts;

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::LlmBackend;
use crate::models::job::JobSuggestion;

/// Asks the model to search the web for open postings matching the résumé.
/// Zero usable lines is an empty list, not an error. Never retried.
pub async fn search_jobs(
    llm: &dyn LlmBackend,
    resume: &str,
    job_description: &str,
) -> Result<Vec<JobSuggestion>, AppError> {
    let prompt = prompts::build_search_prompt(resume, job_description);

    let reply = llm
        .generate_with_search(&prompt)
        .await
        .map_err(|e| AppError::RequestFailed(format!("Job search failed: {e}")))?;

    let jobs = parser::parse_job_suggestions(Some(&reply));
    info!("Job search returned {} suggestions", jobs.len());
    Ok(jobs)
}
