//! Analysis Response Parser: turns the model's structured reply into `AnalysisResult`.

use tracing::error;

use crate::errors::AppError;
use crate::llm_client::strip_json_fences;
use crate::models::analysis::AnalysisResult;

/// Parses the raw reply, tolerating a surrounding ```json fence.
/// Any shape mismatch is a `MalformedResponse`; the raw payload is logged.
pub fn parse_analysis(raw: &str) -> Result<AnalysisResult, AppError> {
    let text = strip_json_fences(raw);
    serde_json::from_str::<AnalysisResult>(text).map_err(|e| {
        error!("Analysis payload did not match schema: {e}; raw payload: {raw}");
        AppError::MalformedResponse(format!("{e}"))
    })
}
