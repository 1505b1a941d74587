// Fakes shared by unit tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::analysis::ReportAnalyzer;
use crate::config::LLMConfig;
use crate::document::{DocumentLoader, OcrEngine};
use crate::llm::LLMAdapter;
use crate::types::{AppError, AppResult, LLMRequest, LLMResponse, TokenUsage};

/// OCR engine that "detects" a fixed list of lines in any image.
pub struct FixedOcr(pub Vec<&'static str>);

#[async_trait]
impl OcrEngine for FixedOcr {
    async fn recognize_lines(&self, _image: &[u8]) -> AppResult<Vec<String>> {
        Ok(self.0.iter().map(|s| s.to_string()).collect())
    }
}

/// Replies with a fixed answer and records every request.
#[derive(Default)]
pub struct StubModel {
    answer: String,
    pub requests: Mutex<Vec<LLMRequest>>,
}

impl StubModel {
    pub fn answering(answer: &str) -> Self {
        Self {
            answer: answer.to_string(),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl LLMAdapter for StubModel {
    async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(LLMResponse {
            content: self.answer.clone(),
            finish_reason: "stop".to_string(),
            usage: TokenUsage::default(),
        })
    }
}

/// Fails every call the way an unreachable endpoint would.
pub struct FailingModel(pub &'static str);

#[async_trait]
impl LLMAdapter for FailingModel {
    async fn create_chat_completion(&self, _request: &LLMRequest) -> AppResult<LLMResponse> {
        Err(AppError::LLMApi(self.0.to_string()))
    }
}

pub fn analyzer(lines: Vec<&'static str>, llm: Arc<dyn LLMAdapter>) -> ReportAnalyzer {
    let loader = DocumentLoader::new(Arc::new(FixedOcr(lines)));
    ReportAnalyzer::new(loader, llm, LLMConfig::default())
}
