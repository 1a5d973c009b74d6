//! Commands
//!
//! Handlers behind the `talentscout` subcommands. Each takes its
//! collaborators explicitly so tests can drive it without a terminal.

pub mod chat;
pub mod check;
pub mod config;

use std::sync::Arc;
use std::time::Duration;

use talentscout_llm::{LlmProvider, OpenAIProvider, ProviderType};
use tracing::warn;

use crate::models::settings::AppConfig;
use crate::services::intake::LlmQuestionGenerator;
use crate::utils::error::AppResult;

/// Create the provider selected by the configuration
pub fn create_provider(config: &AppConfig) -> AppResult<Arc<dyn LlmProvider>> {
    let provider_config = config.provider_config();
    if provider_config.api_key.is_none() {
        warn!(
            env = %config.api_key_env,
            "API key variable is not set; provider calls will fail"
        );
    }

    let provider: Arc<dyn LlmProvider> = match config.provider {
        ProviderType::OpenAI => Arc::new(OpenAIProvider::new(provider_config)?),
    };
    Ok(provider)
}

/// Build the question generator for a chat session
pub fn create_generator(config: &AppConfig) -> AppResult<LlmQuestionGenerator> {
    let provider = create_provider(config)?;
    Ok(LlmQuestionGenerator::new(provider)
        .with_timeout(Duration::from_secs(config.request_timeout_secs))
        .with_temperature(config.temperature))
}
