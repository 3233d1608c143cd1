//! Document Ingestion Adapter: uploaded file bytes → plain text.
//!
//! Routing is by extension (falling back to the declared content type):
//! images go through OCR, `.pdf` through page-by-page text extraction and
//! `.docx` through raw text extraction. Anything else is rejected before it
//! can reach the LLM layer.

pub mod docx;
pub mod handlers;
pub mod ocr;

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::errors::AppError;

pub use ocr::{OcrEngine, TesseractCli};

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file '{file_name}'; accepted: {accepted}")]
    UnsupportedFormat { file_name: String, accepted: String },

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX extraction failed: {0}")]
    Docx(String),

    #[error("OCR failed: {0}")]
    Ocr(String),

    #[error("extractor task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl From<ExtractError> for AppError {
    fn from(e: ExtractError) -> Self {
        match e {
            ExtractError::UnsupportedFormat { accepted, .. } => AppError::UnsupportedFormat(
                format!("Formato de arquivo não suportado. Use {accepted}"),
            ),
            ExtractError::Task(e) => {
                AppError::Internal(anyhow::anyhow!("spawn_blocking failed in extraction: {e}"))
            }
            other => AppError::ExtractionFailure(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Image,
    Pdf,
    Docx,
}

/// Kinds accepted for the résumé field.
pub const RESUME_KINDS: [DocumentKind; 2] = [DocumentKind::Pdf, DocumentKind::Docx];
/// Kinds accepted for the job-description field.
pub const JOB_DESCRIPTION_KINDS: [DocumentKind; 1] = [DocumentKind::Image];

const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];
const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

impl DocumentKind {
    /// Classifies an upload by file extension, then by content type.
    pub fn detect(file_name: &str, content_type: Option<&str>) -> Option<Self> {
        match file_extension(file_name).as_deref() {
            Some("pdf") => return Some(DocumentKind::Pdf),
            Some("docx") => return Some(DocumentKind::Docx),
            Some(ext) if IMAGE_EXTENSIONS.contains(&ext) => return Some(DocumentKind::Image),
            Some(_) => return None,
            None => {}
        }

        match content_type? {
            "application/pdf" => Some(DocumentKind::Pdf),
            DOCX_MIME => Some(DocumentKind::Docx),
            "image/png" | "image/jpeg" | "image/webp" => Some(DocumentKind::Image),
            _ => None,
        }
    }

    fn accepted_label(self) -> &'static str {
        match self {
            DocumentKind::Image => "uma imagem (.png, .jpg, .jpeg ou .webp)",
            DocumentKind::Pdf => ".pdf",
            DocumentKind::Docx => ".docx",
        }
    }
}

/// Lower-cased extension without the dot, if the name has one.
pub fn file_extension(file_name: &str) -> Option<String> {
    std::path::Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
}

fn accepted_list(kinds: &[DocumentKind]) -> String {
    kinds
        .iter()
        .map(|k| k.accepted_label())
        .collect::<Vec<_>>()
        .join(" ou ")
}

/// Routes an upload to the matching extractor.
#[derive(Clone)]
pub struct DocumentExtractor {
    ocr: Arc<dyn OcrEngine>,
}

impl DocumentExtractor {
    pub fn new(ocr: Arc<dyn OcrEngine>) -> Self {
        Self { ocr }
    }

    /// Extracts plain text from `bytes`, accepting only the `allowed` kinds.
    pub async fn extract_text(
        &self,
        file_name: &str,
        content_type: Option<&str>,
        bytes: &[u8],
        allowed: &[DocumentKind],
    ) -> Result<String, ExtractError> {
        let kind = DocumentKind::detect(file_name, content_type)
            .filter(|k| allowed.contains(k))
            .ok_or_else(|| ExtractError::UnsupportedFormat {
                file_name: file_name.to_string(),
                accepted: accepted_list(allowed),
            })?;

        info!(
            "Extracting text from {file_name} as {kind:?} ({} bytes)",
            bytes.len()
        );

        match kind {
            DocumentKind::Image => {
                let extension = file_extension(file_name).unwrap_or_else(|| "png".to_string());
                self.ocr.recognize(bytes, &extension).await
            }
            DocumentKind::Pdf => extract_pdf_text(bytes.to_vec()).await,
            DocumentKind::Docx => {
                let bytes = bytes.to_vec();
                tokio::task::spawn_blocking(move || docx::extract_docx_text(&bytes)).await?
            }
        }
    }
}

/// Page texts joined in order, each page terminated by a newline.
async fn extract_pdf_text(bytes: Vec<u8>) -> Result<String, ExtractError> {
    let pages = tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem_by_pages(&bytes)
    })
    .await?
    .map_err(|e| ExtractError::Pdf(e.to_string()))?;

    Ok(join_pages(&pages))
}

fn join_pages(pages: &[String]) -> String {
    pages.iter().fold(String::new(), |mut text, page| {
        text.push_str(page);
        text.push('\n');
        text
    })
}
