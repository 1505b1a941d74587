//! Document Loader
//!
//! Turns an uploaded medical report into plain text. The upload is classified
//! once at the boundary (`.pdf` vs. everything else) and extraction is a match
//! over the two variants:
//! - PDF: every page's text via `lopdf`, joined with newlines
//! - Image: lines detected by the injected [`OcrEngine`], joined with newlines

pub mod ocr;
pub mod pdf;

use std::sync::Arc;

use bytes::Bytes;
use tracing::{debug, info};

use crate::types::{AppError, AppResult};

pub use ocr::{OcrEngine, TesseractOcr};

/// An uploaded file, tagged by how its text has to be extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadedDocument {
    Pdf { filename: String, bytes: Bytes },
    Image { filename: String, bytes: Bytes },
}

impl UploadedDocument {
    /// Classify an upload by its filename suffix. Only a case-insensitive
    /// `.pdf` suffix selects the PDF path; anything else is treated as an image.
    pub fn from_upload(filename: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        let filename = filename.into();
        let bytes = bytes.into();
        if filename.to_lowercase().ends_with(".pdf") {
            UploadedDocument::Pdf { filename, bytes }
        } else {
            UploadedDocument::Image { filename, bytes }
        }
    }

    pub fn filename(&self) -> &str {
        match self {
            UploadedDocument::Pdf { filename, .. } | UploadedDocument::Image { filename, .. } => filename,
        }
    }

    pub fn bytes(&self) -> &Bytes {
        match self {
            UploadedDocument::Pdf { bytes, .. } | UploadedDocument::Image { bytes, .. } => bytes,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            UploadedDocument::Pdf { .. } => "pdf",
            UploadedDocument::Image { .. } => "image",
        }
    }
}

/// Extracts text from uploaded documents. Holds the long-lived OCR engine.
#[derive(Clone)]
pub struct DocumentLoader {
    ocr: Arc<dyn OcrEngine>,
}

impl DocumentLoader {
    pub fn new(ocr: Arc<dyn OcrEngine>) -> Self {
        Self { ocr }
    }

    /// Extract the document's text, trimmed. An empty string means nothing
    /// readable was found; parse and OCR failures are `AppError::Extraction`.
    pub async fn extract(&self, document: &UploadedDocument) -> AppResult<String> {
        debug!(
            filename = %document.filename(),
            kind = document.kind(),
            size = document.bytes().len(),
            "Extracting document text"
        );

        let text = match document {
            UploadedDocument::Pdf { bytes, .. } => {
                let bytes = bytes.clone();
                let pages = tokio::task::spawn_blocking(move || pdf::page_texts(&bytes))
                    .await
                    .map_err(|e| AppError::Internal(format!("PDF extraction task failed: {}", e)))??;
                pdf::join_pages(&pages)
            }
            UploadedDocument::Image { bytes, .. } => {
                let lines = self.ocr.recognize_lines(bytes).await?;
                lines.join("\n").trim().to_string()
            }
        };

        info!(
            filename = %document.filename(),
            kind = document.kind(),
            chars = text.chars().count(),
            "Document text extracted"
        );

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FixedOcr;
    use async_trait::async_trait;

    struct BrokenOcr;

    #[async_trait]
    impl OcrEngine for BrokenOcr {
        async fn recognize_lines(&self, _image: &[u8]) -> AppResult<Vec<String>> {
            Err(AppError::Extraction("unsupported image format".to_string()))
        }
    }

    fn loader(ocr: impl OcrEngine + 'static) -> DocumentLoader {
        DocumentLoader::new(Arc::new(ocr))
    }

    #[test]
    fn test_from_upload_dispatches_on_suffix() {
        assert_eq!(UploadedDocument::from_upload("report.pdf", Bytes::new()).kind(), "pdf");
        assert_eq!(UploadedDocument::from_upload("REPORT.PDF", Bytes::new()).kind(), "pdf");
        assert_eq!(UploadedDocument::from_upload("scan.Pdf", Bytes::new()).kind(), "pdf");
        assert_eq!(UploadedDocument::from_upload("scan.png", Bytes::new()).kind(), "image");
        assert_eq!(UploadedDocument::from_upload("scan.jpeg", Bytes::new()).kind(), "image");
        assert_eq!(UploadedDocument::from_upload("pdf", Bytes::new()).kind(), "image");
        assert_eq!(UploadedDocument::from_upload("report.pdf.jpg", Bytes::new()).kind(), "image");
    }

    #[test]
    fn test_from_upload_keeps_filename_and_bytes() {
        let doc = UploadedDocument::from_upload("labs.jpg", vec![1u8, 2, 3]);
        assert_eq!(doc.filename(), "labs.jpg");
        assert_eq!(doc.bytes().as_ref(), &[1u8, 2, 3]);
    }

    #[tokio::test]
    async fn test_image_lines_joined_and_trimmed() {
        let loader = loader(FixedOcr(vec!["  CBC Panel", "Hemoglobin: 9 g/dL (Low)", "WBC: 6.1  "]));
        let doc = UploadedDocument::from_upload("labs.png", vec![0u8; 4]);

        let text = loader.extract(&doc).await.unwrap();
        assert_eq!(text, "CBC Panel\nHemoglobin: 9 g/dL (Low)\nWBC: 6.1");
    }

    #[tokio::test]
    async fn test_image_without_lines_is_empty() {
        let loader = loader(FixedOcr(vec![]));
        let doc = UploadedDocument::from_upload("blank.png", vec![0u8; 4]);

        assert_eq!(loader.extract(&doc).await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_ocr_failure_is_extraction_error() {
        let loader = loader(BrokenOcr);
        let doc = UploadedDocument::from_upload("labs.png", vec![0u8; 4]);

        let err = loader.extract(&doc).await.unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }

    #[tokio::test]
    async fn test_malformed_pdf_is_extraction_error() {
        let loader = loader(FixedOcr(vec!["never used"]));
        let doc = UploadedDocument::from_upload("report.pdf", b"not a pdf".to_vec());

        let err = loader.extract(&doc).await.unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }

    #[tokio::test]
    async fn test_pdf_pages_extracted_in_order() {
        let loader = loader(FixedOcr(vec!["never used"]));
        let bytes = pdf::tests::build_pdf(&["Hemoglobin 9 gdL Low", "Platelets 150 Normal"]);
        let doc = UploadedDocument::from_upload("report.pdf", bytes);

        let text = loader.extract(&doc).await.unwrap();
        assert_eq!(text, "Hemoglobin 9 gdL Low\n\nPlatelets 150 Normal");
    }
}
