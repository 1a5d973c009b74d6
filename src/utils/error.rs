//! Error Handling
//!
//! Unified error types for the application.
//! Uses thiserror for ergonomic error definitions.

use talentscout_core::CoreError;
use talentscout_llm::LlmError;
use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Input named something the intake does not know
    #[error("Validation error: {0}")]
    Validation(String),

    /// The intake was driven outside its transition table
    #[error("Protocol violation: {0}")]
    Protocol(String),

    /// LLM provider errors
    #[error("Provider error: {0}")]
    Provider(#[from] LlmError),
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a protocol violation error
    pub fn protocol(msg: impl Into<String>) -> Self {
        Self::Protocol(msg.into())
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Protocol(msg) => Self::Protocol(msg),
            CoreError::Serialization(e) => Self::Serialization(e),
            CoreError::UnknownField(name) => Self::Validation(format!("unknown field: {}", name)),
        }
    }
}
