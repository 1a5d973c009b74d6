//! Storage Layer
//!
//! Handles the JSON config file. Candidate sessions are never persisted.

pub mod config;

pub use config::*;
