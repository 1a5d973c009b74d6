//! Candidate Intake
//!
//! A linear screening conversation: greet, collect seven candidate fields in
//! a fixed order, then ask a [`QuestionGenerator`] for interview questions
//! matching the declared tech stack.
//!
//! - `step`: the question sequence as an enum
//! - `transition`: pure per-turn state update
//! - `machine`: async driver that runs generation effects
//! - `generator`: question generation over an LLM provider

pub mod generator;
pub mod machine;
pub mod messages;
pub mod session;
pub mod step;
pub mod transition;

pub use generator::{
    build_question_prompt, GenerationError, LlmQuestionGenerator, QuestionGenerator,
};
pub use machine::{IntakeMachine, TurnOutcome, TurnStatus};
pub use session::{IntakeSession, SessionStatus};
pub use step::IntakeStep;
pub use transition::{transition, Effect, Transition};
