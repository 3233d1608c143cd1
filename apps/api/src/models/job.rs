use serde::{Deserialize, Serialize};

/// One open posting found by the search-tool call. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSuggestion {
    pub title: String,
    pub company: String,
    pub platform: String,
    pub url: String,
}
