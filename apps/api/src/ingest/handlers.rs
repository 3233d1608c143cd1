//! Axum route handlers for document uploads.
//!
//! A rejected or failed upload returns only the error, never partial or
//! placeholder text, so the field the caller was filling stays empty.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;

use crate::errors::AppError;
use crate::ingest::{DocumentKind, JOB_DESCRIPTION_KINDS, RESUME_KINDS};
use crate::state::AppState;

const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct ExtractedText {
    pub text: String,
}

struct Upload {
    file_name: String,
    content_type: Option<String>,
    bytes: Bytes,
}

/// POST /api/v1/documents/resume
///
/// Accepts `.pdf` or `.docx` in the multipart field `file`.
pub async fn handle_resume_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ExtractedText>, AppError> {
    extract_upload(&state, multipart, &RESUME_KINDS).await
}

/// POST /api/v1/documents/job-description
///
/// Accepts a screenshot or photo of the posting (png, jpg, jpeg, webp) for OCR.
pub async fn handle_job_description_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ExtractedText>, AppError> {
    extract_upload(&state, multipart, &JOB_DESCRIPTION_KINDS).await
}

async fn extract_upload(
    state: &AppState,
    multipart: Multipart,
    allowed: &[DocumentKind],
) -> Result<Json<ExtractedText>, AppError> {
    let upload = read_upload(multipart).await?;
    let text = state
        .extractor
        .extract_text(
            &upload.file_name,
            upload.content_type.as_deref(),
            &upload.bytes,
            allowed,
        )
        .await?;
    Ok(Json(ExtractedText { text }))
}

async fn read_upload(mut multipart: Multipart) -> Result<Upload, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;

        return Ok(Upload {
            file_name,
            content_type,
            bytes,
        });
    }

    Err(AppError::Validation(
        "Nenhum arquivo enviado no campo 'file'.".to_string(),
    ))
}
