//! Prompt construction and answer clean-up for medical report analysis.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::LLMConfig;
use crate::types::{LLMMessage, LLMRequest};

/// Section headings the model is asked to produce, in order.
pub const SECTIONS: [&str; 3] = [
    "**Short Description:**",
    "**Key Concerns:**",
    "**Recommendations:**",
];

static REASONING_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<think>.*?</think>").expect("reasoning pattern is valid"));

/// Wrap extracted report text in the fixed analysis instructions.
pub fn build_prompt(report_text: &str) -> String {
    format!(
        "Analyze the following medical report and provide a structured response in the exact format below.
Follow this structure exactly and do not add extra blank lines.
{short}
[Briefly summarize the report in 2-3 sentences. Include key test details.]
{concerns}
List them in order. For each, give the test name and value and say whether it is high or low. Keep it short.
2-3 main concerns are enough.
1. **[Test Name (Value)]:** [High or low. Explain what the abnormality suggests.]

{recommendations}
Give 2-3 bullet points without lengthy explanation.

Medical Report:
{report_text}
",
        short = SECTIONS[0],
        concerns = SECTIONS[1],
        recommendations = SECTIONS[2],
    )
}

/// Single-turn chat request carrying the prompt for `report_text`.
pub fn build_request(report_text: &str, config: &LLMConfig) -> LLMRequest {
    LLMRequest {
        model: config.model.clone(),
        messages: vec![LLMMessage::user(build_prompt(report_text))],
        max_tokens: Some(config.max_tokens),
        temperature: None,
    }
}

/// Remove every `<think>...</think>` block (across lines) and trim the rest.
pub fn strip_reasoning(answer: &str) -> String {
    REASONING_BLOCK.replace_all(answer, "").trim().to_string()
}
