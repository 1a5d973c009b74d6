//! Core Error Types
//!
//! Defines the foundational error types used across the TalentScout workspace.
//! These error types are dependency-free (only thiserror + std) to keep the core
//! crate lightweight.
//!
//! The application crate extends these with variants for configuration,
//! I/O and provider failures.

use thiserror::Error;

/// Core error type for the TalentScout workspace.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The intake was driven outside its transition table
    /// (e.g. an out-of-range step index)
    #[error("Protocol violation: {0}")]
    Protocol(String),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Unknown field name
    #[error("Unknown field: {0}")]
    UnknownField(String),
}

/// Result type alias for core errors
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Create a protocol violation error
    pub fn protocol(msg: impl Into<String>) -> Self {
        Self::Protocol(msg.into())
    }

    /// Create an unknown field error
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField(name.into())
    }
}

/// Convert CoreError to a string
impl From<CoreError> for String {
    fn from(err: CoreError) -> String {
        err.to_string()
    }
}
