//! TalentScout LLM
//!
//! Provides a unified interface for talking to chat-completion LLM providers.
//! Currently ships the OpenAI provider; the `LlmProvider` trait is the seam
//! the intake's question generator depends on.

pub mod http_client;
pub mod openai;
pub mod provider;
pub mod types;

// Re-export main types
pub use http_client::build_http_client;
pub use openai::OpenAIProvider;
pub use provider::LlmProvider;
pub use types::*;
