use std::sync::Arc;

use crate::analysis::ReportAnalyzer;
use crate::config::Config;
use crate::document::{DocumentLoader, TesseractOcr};
use crate::llm::create_adapter;
use crate::types::AppResult;

/// Shared request state: the configuration plus the pipeline with its
/// long-lived OCR engine and model client.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub analyzer: ReportAnalyzer,
}

impl AppState {
    /// Wire the production OCR engine and inference client.
    pub fn from_config(config: Config) -> AppResult<Self> {
        let ocr = Arc::new(TesseractOcr::new(&config.ocr));
        let llm = create_adapter(&config.llm)?;
        let analyzer = ReportAnalyzer::new(DocumentLoader::new(ocr), llm, config.llm.clone());

        Ok(Self { config, analyzer })
    }
}

// API Request/Response types

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct AnalyzeResponse {
    /// "success" or "error"
    pub status: String,
    /// Text to display: the analysis, the no-text message or an "Error: ..." line
    pub output: String,
}

#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}
