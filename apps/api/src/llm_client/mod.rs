/// LLM Client: the single point of entry for all Gemini API calls.
///
/// No other module may call the Gemini API directly. Handlers reach the model
/// through the `LlmBackend` trait carried in `AppState`, so tests can swap in a
/// scripted backend.
///
/// Calls are never retried: search results are time-sensitive and a silent
/// retry would hide a failed request behind a stale answer.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::Config;

pub mod prompts;

const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// A callable that accepts a prompt (plus a schema or the search tool) and
/// returns the model's text, or fails.
#[async_trait]
pub trait LlmBackend: Send + Sync {
    /// Schema-constrained JSON generation. Returns the raw reply text.
    async fn generate_structured(&self, prompt: &str, schema: &Value) -> Result<String, LlmError>;

    /// Free-text generation with live web search enabled.
    /// Returns an empty string when the model produced no text.
    async fn generate_with_search(&self, prompt: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Value>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
    response_schema: &'a Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl GenerateResponse {
    /// Concatenates the text parts of the first candidate.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// Gemini `generateContent` client used for both the analysis and the job search.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    analysis_model: String,
    search_model: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key: config.gemini_api_key.clone(),
            base_url: config.gemini_api_url.trim_end_matches('/').to_string(),
            analysis_model: config.analysis_model.clone(),
            search_model: config.search_model.clone(),
        }
    }

    pub fn analysis_model(&self) -> &str {
        &self.analysis_model
    }

    pub fn search_model(&self) -> &str {
        &self.search_model
    }

    /// Makes one `generateContent` call and returns the full response object.
    async fn call(
        &self,
        model: &str,
        request: &GenerateRequest<'_>,
    ) -> Result<GenerateResponse, LlmError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, model);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let generated: GenerateResponse = response.json().await?;

        if let Some(usage) = &generated.usage_metadata {
            debug!(
                "LLM call succeeded: model={model}, prompt_tokens={}, output_tokens={}",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }

        Ok(generated)
    }
}

#[async_trait]
impl LlmBackend for GeminiClient {
    async fn generate_structured(&self, prompt: &str, schema: &Value) -> Result<String, LlmError> {
        info!(
            "Calling {} with structured output ({} prompt chars)",
            self.analysis_model,
            prompt.len()
        );
        let request = GenerateRequest {
            contents: vec![user_content(prompt)],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema,
            }),
            tools: Vec::new(),
        };

        let text = self.call(&self.analysis_model, &request).await?.text();
        if text.trim().is_empty() {
            return Err(LlmError::EmptyContent);
        }
        Ok(text)
    }

    async fn generate_with_search(&self, prompt: &str) -> Result<String, LlmError> {
        info!(
            "Calling {} with web search ({} prompt chars)",
            self.search_model,
            prompt.len()
        );
        let request = GenerateRequest {
            contents: vec![user_content(prompt)],
            generation_config: None,
            tools: vec![serde_json::json!({ "google_search": {} })],
        };

        Ok(self.call(&self.search_model, &request).await?.text())
    }
}

fn user_content(prompt: &str) -> RequestContent<'_> {
    RequestContent {
        role: "user",
        parts: vec![RequestPart { text: prompt }],
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
