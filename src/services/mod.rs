//! Services
//!
//! Business logic services for the application.
//! Services handle the core functionality and are called by commands.

pub mod intake;

pub use intake::{IntakeMachine, IntakeSession, LlmQuestionGenerator, QuestionGenerator};
