use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

/// Error kinds surfaced at the action boundary.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Raw transport and parser details are logged here and never sent to the client.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed LLM response: {0}")]
    MalformedResponse(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Text extraction failed: {0}")]
    ExtractionFailure(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::RequestFailed(_) | AppError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
            AppError::UnsupportedFormat(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::ExtractionFailure(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Storage(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message) = match &self {
            AppError::Validation(msg) => ("VALIDATION_ERROR", msg.clone()),
            AppError::RequestFailed(msg) => {
                tracing::error!("LLM request failed: {msg}");
                (
                    "REQUEST_FAILED",
                    "Ocorreu um erro ao consultar o serviço de IA. Por favor, tente novamente."
                        .to_string(),
                )
            }
            AppError::MalformedResponse(msg) => {
                tracing::error!("Malformed LLM response: {msg}");
                (
                    "MALFORMED_RESPONSE",
                    "Ocorreu um erro ao analisar os dados. Por favor, tente novamente.".to_string(),
                )
            }
            AppError::UnsupportedFormat(msg) => ("UNSUPPORTED_FORMAT", msg.clone()),
            AppError::ExtractionFailure(msg) => {
                tracing::error!("Extraction failure: {msg}");
                (
                    "EXTRACTION_FAILURE",
                    "Ocorreu um erro ao ler o arquivo.".to_string(),
                )
            }
            AppError::NotFound(msg) => ("NOT_FOUND", msg.clone()),
            AppError::Storage(e) => {
                tracing::error!("Storage error: {e}");
                (
                    "STORAGE_ERROR",
                    "Não foi possível salvar as análises.".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

/// JSON request body whose rejections (bad syntax, wrong shape, missing
/// content type) come back as a `VALIDATION_ERROR` body.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
