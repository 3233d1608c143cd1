//! OCR through the external `tesseract` binary, tuned for Portuguese.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::ingest::ExtractError;

/// Language pack passed to tesseract.
pub const OCR_LANGUAGE: &str = "por";

/// Same bound as an LLM call.
const OCR_TIMEOUT: Duration = Duration::from_secs(120);

#[async_trait]
pub trait OcrEngine: Send + Sync {
    /// Recognizes text in an encoded image (`extension` names its format).
    async fn recognize(&self, image: &[u8], extension: &str) -> Result<String, ExtractError>;
}

pub struct TesseractCli {
    binary: PathBuf,
    timeout: Duration,
}

impl TesseractCli {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            timeout: OCR_TIMEOUT,
        }
    }
}

#[async_trait]
impl OcrEngine for TesseractCli {
    async fn recognize(&self, image: &[u8], extension: &str) -> Result<String, ExtractError> {
        // tesseract reads from a path; the temp file is removed on drop.
        let mut input = tempfile::Builder::new()
            .prefix("upload-")
            .suffix(&format!(".{extension}"))
            .tempfile()
            .map_err(|e| ExtractError::Ocr(format!("temp file: {e}")))?;
        input
            .write_all(image)
            .map_err(|e| ExtractError::Ocr(format!("temp file: {e}")))?;

        // kill_on_drop reaps the child when the timeout drops the future.
        let run = Command::new(&self.binary)
            .arg(input.path())
            .arg("stdout")
            .arg("-l")
            .arg(OCR_LANGUAGE)
            .kill_on_drop(true)
            .output();

        let output = tokio::time::timeout(self.timeout, run)
            .await
            .map_err(|_| {
                ExtractError::Ocr(format!("tesseract timed out after {:?}", self.timeout))
            })?
            .map_err(|e| {
                ExtractError::Ocr(format!("could not run {}: {e}", self.binary.display()))
            })?;

        if !output.status.success() {
            return Err(ExtractError::Ocr(format!(
                "tesseract exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!("OCR produced {} chars", text.len());
        Ok(text)
    }
}
