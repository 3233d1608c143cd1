use serde::{Deserialize, Serialize};

use crate::models::analysis::AnalysisResult;

/// A past analysis persisted with the inputs that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedAnalysis {
    /// Millisecond timestamp token, unique within the collection.
    pub id: String,
    /// Local time, pt-BR layout (`dd/mm/yyyy, HH:MM:SS`).
    pub saved_at: String,
    pub analysis_result: AnalysisResult,
    pub job_description: String,
    pub resume: String,
}
