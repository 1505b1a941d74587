//! Report Analysis Pipeline
//!
//! Runs one uploaded report through extract -> prompt -> model -> clean-up.
//! Every dependency is injected so the pipeline can run against fakes.

pub mod prompt;

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::LLMConfig;
use crate::document::{DocumentLoader, UploadedDocument};
use crate::llm::LLMAdapter;
use crate::types::{AppError, AppResult};

pub use prompt::{build_prompt, build_request, strip_reasoning};

/// Shown when extraction produced no text.
pub const NO_TEXT_MESSAGE: &str = "No text found in the uploaded document.";

#[derive(Clone)]
pub struct ReportAnalyzer {
    loader: DocumentLoader,
    llm: Arc<dyn LLMAdapter>,
    config: LLMConfig,
}

impl ReportAnalyzer {
    pub fn new(loader: DocumentLoader, llm: Arc<dyn LLMAdapter>, config: LLMConfig) -> Self {
        Self { loader, llm, config }
    }

    /// Analyze a report. The model is only called when extraction yields text.
    pub async fn analyze(&self, document: &UploadedDocument) -> AppResult<String> {
        let text = self.loader.extract(document).await?;
        if text.is_empty() {
            warn!(filename = %document.filename(), "No text extracted, skipping model call");
            return Err(AppError::EmptyDocument);
        }

        let request = build_request(&text, &self.config);
        info!(
            filename = %document.filename(),
            model = %request.model,
            prompt_chars = request.messages[0].content.len(),
            "Requesting report analysis"
        );

        let response = self.llm.create_chat_completion(&request).await?;
        info!(
            finish_reason = %response.finish_reason,
            completion_tokens = response.usage.completion_tokens,
            "Analysis received"
        );

        Ok(strip_reasoning(&response.content))
    }
}

/// Format a pipeline outcome for display.
pub fn render_outcome(outcome: &AppResult<String>) -> String {
    match outcome {
        Ok(answer) => answer.clone(),
        Err(AppError::EmptyDocument) => NO_TEXT_MESSAGE.to_string(),
        Err(err) => format!("Error: {}", err),
    }
}
