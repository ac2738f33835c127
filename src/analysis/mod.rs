//! Document analysis: prompt the completion service and parse its reply.
//!
//! The contract is deliberately string-based. The prompt in
//! [`crate::prompts`] forces the model into a line-oriented reply format,
//! and [`parse_reply`] reads it back without ever failing: malformed or
//! missing fields degrade to documented defaults.

mod parser;

pub use parser::parse_reply;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AppResult;
use crate::groq::{ChatRequest, GroqClient, Message};
use crate::prompts;

/// Sampling temperature for analysis calls. Low enough that the reply stays
/// close to the mandated format.
const TEMPERATURE: f32 = 0.4;

/// Generation cap: three short suggestions plus a score line and tone line.
const MAX_TOKENS: u32 = 512;

/// Tone reported when the reply carries no usable TONE line.
pub(crate) const TONE_FALLBACK: &str = "Unable to determine tone";

/// Score reported when the reply carries no usable CLARITY_SCORE line.
pub(crate) const SCORE_FALLBACK: u8 = 5;

/// Structured result of a document analysis.
///
/// Constructed fresh per analysis call and immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Clarity rating, always within 1-10.
    pub clarity_score: u8,
    /// Free-text description of the writing tone.
    pub tone: String,
    /// Suggestions in the order they appeared in the reply.
    pub suggestions: Vec<String>,
    /// Verbatim reply text, kept for diagnostics.
    pub raw: String,
}

/// Runs analysis calls against the completion service.
#[derive(Clone)]
pub struct Analyzer {
    groq: GroqClient,
    model: String,
}

impl Analyzer {
    /// Create an analyzer over the given client and model name.
    pub fn new(groq: GroqClient, model: impl Into<String>) -> Self {
        Self {
            groq,
            model: model.into(),
        }
    }

    /// Analyze a document for the given style and target clarity score.
    ///
    /// `style` is a free-form label; `target_score` is expected in 1-10 but
    /// passed to the model as given. One completion call per invocation;
    /// transport and service errors propagate to the caller unmodified.
    pub async fn analyze(
        &self,
        text: &str,
        style: &str,
        target_score: u8,
    ) -> AppResult<AnalysisResult> {
        let request = ChatRequest::new(
            &self.model,
            vec![
                Message::system(prompts::analysis_system_prompt(style, target_score)),
                Message::user(prompts::analysis_user_message(text)),
            ],
        )
        .with_temperature(TEMPERATURE)
        .with_max_tokens(MAX_TOKENS);

        let response = self.groq.chat(request).await?;
        let raw = response.completion();

        debug!(reply_chars = raw.len(), "Parsing analysis reply");

        Ok(parse_reply(&raw))
    }
}
