//! Response Types
//!
//! Structured results printed by the CLI commands.

use serde::{Deserialize, Serialize};

/// Provider health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub service: String,
    pub provider: String,
    pub model: String,
    pub api_key_configured: bool,
    pub reachable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "unknown".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            service: "talentscout".to_string(),
            provider: String::new(),
            model: String::new(),
            api_key_configured: false,
            reachable: false,
            error: None,
        }
    }
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.api_key_configured && self.reachable
    }

    /// Recompute `status` from the individual checks
    pub fn finish(mut self) -> Self {
        self.status = if self.is_healthy() {
            "healthy".to_string()
        } else {
            "degraded".to_string()
        };
        self
    }
}
