//! Résumé analysis: prompt and schema construction, the structured LLM call,
//! parsing of the reply, and the plain-text report export.
//! All LLM calls go through llm_client; no direct Gemini calls here.

pub mod handlers;
pub mod parser;
pub mod prompts;
pub mod report;
pub mod schema;

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::LlmBackend;
use crate::models::analysis::AnalysisResult;

/// Runs one analysis: build prompt and schema → request → parse.
/// Strictly sequential; nothing is retried.
pub async fn analyze_resume(
    llm: &dyn LlmBackend,
    job_description: &str,
    resume: &str,
) -> Result<AnalysisResult, AppError> {
    let prompt = prompts::build_analysis_prompt(job_description, resume);
    let schema = schema::analysis_response_schema();

    let raw = llm
        .generate_structured(&prompt, &schema)
        .await
        .map_err(|e| AppError::RequestFailed(format!("Resume analysis failed: {e}")))?;

    let result = parser::parse_analysis(&raw)?;
    info!(
        "Analysis parsed: total_score={}, factors={}",
        result.compatibility.total_score,
        result.compatibility.breakdown.len()
    );
    Ok(result)
}
