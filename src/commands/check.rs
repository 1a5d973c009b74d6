//! Health Check Command
//!
//! Verifies that the configured provider has a key and is reachable.

use talentscout_llm::LlmProvider;
use tracing::warn;

use crate::models::response::HealthResponse;

/// Run the provider health check
pub async fn check_provider(provider: &dyn LlmProvider) -> HealthResponse {
    let mut health = HealthResponse {
        provider: provider.name().to_string(),
        model: provider.model().to_string(),
        api_key_configured: provider.config().api_key.is_some(),
        ..Default::default()
    };

    match provider.health_check().await {
        Ok(()) => health.reachable = true,
        Err(e) => {
            warn!(provider = provider.name(), error = %e, "Provider health check failed");
            health.error = Some(e.to_string());
        }
    }

    health.finish()
}
