//! TalentScout Hiring Assistant
//!
//! A conversational candidate intake. The library provides:
//! - the intake state machine and question generator (`services::intake`)
//! - configuration storage (`storage`, `models::settings`)
//! - CLI command handlers (`commands`)
//! - error types and path helpers (`utils`)

pub mod commands;
pub mod models;
pub mod services;
pub mod storage;
pub mod utils;

pub use models::settings::{AppConfig, SettingsUpdate};
pub use services::intake::{
    IntakeMachine, IntakeSession, IntakeStep, LlmQuestionGenerator, QuestionGenerator,
};
pub use storage::config::ConfigService;
pub use utils::error::{AppError, AppResult};
