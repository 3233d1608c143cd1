use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use tracing::warn;

/// A single scored dimension of résumé-to-vacancy fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityFactor {
    pub factor: String,
    #[serde(deserialize_with = "deserialize_score")]
    pub score: u8, // 0 – 100
    pub justification: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Compatibility {
    /// Weighted aggregate of `breakdown`, computed by the model.
    #[serde(deserialize_with = "deserialize_score")]
    pub total_score: u8,
    pub feedback: String,
    pub breakdown: Vec<CompatibilityFactor>,
    /// Targeted at the lowest-scoring factor. May be absent in the reply.
    #[serde(default)]
    pub focused_improvement_suggestions: Vec<Suggestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub skill: String,
    /// Free-form label, usually "Alta" or "Média".
    pub importance: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub area: String,
    pub suggestion: String,
}

/// Reflective prompts per STAR letter. Guidance text, never a ready-made narrative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarGuide {
    pub suggestion_title: String,
    pub situation: String,
    pub task: String,
    pub action: String,
    pub result: String,
}

/// Aggregate root of one analysis. Only ever built whole from a successful parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub compatibility: Compatibility,
    pub common_skills: Vec<Skill>,
    pub improvement_suggestions: Vec<Suggestion>,
    pub star_method_guides: Vec<StarGuide>,
}

/// Accepts any JSON number, rounds it and clamps it into 0..=100.
/// The model is schema-constrained to integers but not to the range.
fn deserialize_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if !raw.is_finite() {
        return Err(D::Error::custom("score must be a finite number"));
    }
    let clamped = raw.round().clamp(0.0, 100.0);
    if clamped != raw {
        warn!("Score {raw} from model adjusted to {clamped}");
    }
    Ok(clamped as u8)
}
