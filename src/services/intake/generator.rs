//! Question Generator
//!
//! Turns a tech-stack string into interview questions. The intake only sees
//! the [`QuestionGenerator`] trait; [`LlmQuestionGenerator`] is the production
//! implementation over any [`LlmProvider`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use talentscout_llm::{LlmError, LlmProvider, LlmRequestOptions, Message};
use thiserror::Error;
use tracing::{debug, warn};

/// System instruction for question generation
pub const INTERVIEWER_SYSTEM_PROMPT: &str = "You are a technical interviewer.";

/// Default sampling temperature; kept low so questions stay on topic
pub const DEFAULT_QUESTION_TEMPERATURE: f32 = 0.3;

/// Default bound on a single generation call
pub const DEFAULT_GENERATION_TIMEOUT: Duration = Duration::from_secs(60);

/// Why question generation failed. Never shown to the candidate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    #[error("question generation timed out after {0:?}")]
    Timeout(Duration),

    #[error("provider error: {0}")]
    Provider(#[from] LlmError),

    #[error("provider returned no text")]
    EmptyResponse,
}

/// Produces interview questions for a tech stack
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn generate(&self, tech_stack: &str) -> Result<String, GenerationError>;
}

/// Build the user instruction, embedding `tech_stack` verbatim
pub fn build_question_prompt(tech_stack: &str) -> String {
    format!(
        "Generate 3 to 5 technical interview questions for each of the following technologies:\n\
         {}\n\n\
         Rules:\n\
         - No answers\n\
         - Beginner to intermediate level\n\
         - Bullet point format",
        tech_stack
    )
}

/// [`QuestionGenerator`] backed by an LLM provider.
///
/// Sends exactly one request per call; there is no retry.
pub struct LlmQuestionGenerator {
    provider: Arc<dyn LlmProvider>,
    timeout: Duration,
    temperature: f32,
}

impl LlmQuestionGenerator {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider,
            timeout: DEFAULT_GENERATION_TIMEOUT,
            temperature: DEFAULT_QUESTION_TEMPERATURE,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl QuestionGenerator for LlmQuestionGenerator {
    async fn generate(&self, tech_stack: &str) -> Result<String, GenerationError> {
        let messages = vec![Message::user(build_question_prompt(tech_stack))];
        let options = LlmRequestOptions {
            temperature_override: Some(self.temperature),
        };

        debug!(
            provider = self.provider.name(),
            model = %self.provider.model(),
            "Requesting interview questions"
        );

        let response = tokio::time::timeout(
            self.timeout,
            self.provider.send_message(
                messages,
                Some(INTERVIEWER_SYSTEM_PROMPT.to_string()),
                options,
            ),
        )
        .await
        .map_err(|_| {
            warn!(timeout_secs = self.timeout.as_secs(), "Question generation timed out");
            GenerationError::Timeout(self.timeout)
        })??;

        debug!(
            output_tokens = response.usage.output_tokens,
            "Interview questions received"
        );

        response
            .text()
            .map(str::to_string)
            .ok_or(GenerationError::EmptyResponse)
    }
}
