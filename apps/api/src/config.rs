use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_ANALYSIS_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_SEARCH_MODEL: &str = "gemini-2.5-pro";
const DEFAULT_STORE_PATH: &str = "data/saved_analyses.json";

/// Application configuration loaded from environment variables.
/// Startup fails if `GEMINI_API_KEY` is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_api_url: String,
    /// Model used for the schema-constrained résumé analysis.
    pub analysis_model: String,
    /// Model used for the search-tool job lookup.
    pub search_model: String,
    pub store_path: PathBuf,
    pub tesseract_path: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            gemini_api_url: env_or("GEMINI_API_URL", DEFAULT_GEMINI_API_URL),
            analysis_model: env_or("ANALYSIS_MODEL", DEFAULT_ANALYSIS_MODEL),
            search_model: env_or("SEARCH_MODEL", DEFAULT_SEARCH_MODEL),
            store_path: PathBuf::from(env_or("STORE_PATH", DEFAULT_STORE_PATH)),
            tesseract_path: env_or("TESSERACT_PATH", "tesseract"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
