//! Data Models
//!
//! Configuration and response structures shared by the CLI and the services.

pub mod response;
pub mod settings;

pub use response::HealthResponse;
pub use settings::{AppConfig, SettingsUpdate};
