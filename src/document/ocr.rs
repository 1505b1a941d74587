//! OCR engines for image uploads.
//!
//! [`TesseractOcr`] shells out to the `tesseract` binary, which must be on the
//! PATH (or configured via `TESSERACT_BIN`).

use std::io::Write;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::config::OcrConfig;
use crate::types::{AppError, AppResult};

#[async_trait]
pub trait OcrEngine: Send + Sync {
    /// Detect text lines in an encoded image (PNG, JPEG, TIFF, ...).
    async fn recognize_lines(&self, image: &[u8]) -> AppResult<Vec<String>>;
}

pub struct TesseractOcr {
    binary: String,
    language: String,
}

impl TesseractOcr {
    pub fn new(config: &OcrConfig) -> Self {
        Self {
            binary: config.binary.clone(),
            language: config.language.clone(),
        }
    }
}

#[async_trait]
impl OcrEngine for TesseractOcr {
    async fn recognize_lines(&self, image: &[u8]) -> AppResult<Vec<String>> {
        // tesseract sniffs the format from content, so the scratch file needs no suffix
        let mut file = tempfile::NamedTempFile::new()
            .map_err(|e| AppError::Internal(format!("Failed to create scratch file: {}", e)))?;
        file.write_all(image)
            .and_then(|_| file.flush())
            .map_err(|e| AppError::Internal(format!("Failed to write scratch file: {}", e)))?;

        debug!(binary = %self.binary, language = %self.language, size = image.len(), "Running OCR");

        let output = Command::new(&self.binary)
            .arg(file.path())
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .output()
            .await
            .map_err(|e| AppError::Extraction(format!("Failed to run {}: {}", self.binary, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(status = %output.status, "OCR process failed");
            return Err(AppError::Extraction(format!(
                "{} exited with {}: {}",
                self.binary,
                output.status,
                stderr.trim()
            )));
        }

        Ok(split_lines(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// Split OCR output into trimmed, non-blank lines.
pub fn split_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
