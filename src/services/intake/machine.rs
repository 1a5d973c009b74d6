//! Intake Machine
//!
//! Async driver around the pure [`transition`]. It owns the validator
//! registry and the question generator, runs any [`Effect`] the transition
//! returns and feeds the outcome back into the session.

use std::sync::Arc;

use talentscout_core::{CandidateField, TranscriptEntry, TranscriptRole, ValidatorRegistry};
use tracing::{info, warn};

use super::generator::QuestionGenerator;
use super::session::IntakeSession;
use super::step::IntakeStep;
use super::transition::{transition, Effect, Transition};
use crate::utils::error::AppResult;

/// How a turn ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStatus {
    Greeted,
    Accepted(CandidateField),
    Rejected(CandidateField),
    /// Questions generated and the screening finished
    Completed,
    /// Generator failed; the candidate may resend the tech stack
    GenerationFailed,
    Closed,
    Exited,
}

/// Summary of one handled turn
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    pub status: TurnStatus,
    pub step: IntakeStep,
    /// Assistant entries appended during this turn, in order
    pub replies: Vec<String>,
}

pub struct IntakeMachine {
    validators: ValidatorRegistry,
    generator: Arc<dyn QuestionGenerator>,
}

impl IntakeMachine {
    /// Create a machine with the default validators
    pub fn new(generator: Arc<dyn QuestionGenerator>) -> Self {
        Self::with_validators(generator, ValidatorRegistry::with_defaults())
    }

    pub fn with_validators(
        generator: Arc<dyn QuestionGenerator>,
        validators: ValidatorRegistry,
    ) -> Self {
        Self {
            validators,
            generator,
        }
    }

    pub fn validators(&self) -> &ValidatorRegistry {
        &self.validators
    }

    pub fn start_session(&self) -> IntakeSession {
        info!("Intake session started");
        IntakeSession::new()
    }

    /// Handle one user input.
    pub async fn handle_turn(
        &self,
        session: &mut IntakeSession,
        input: &str,
    ) -> AppResult<TurnOutcome> {
        self.handle_turn_with_progress(session, input, |_| {}).await
    }

    /// Handle one user input, calling `progress` with the entries appended by
    /// the transition before any slow effect runs.
    pub async fn handle_turn_with_progress<F>(
        &self,
        session: &mut IntakeSession,
        input: &str,
        mut progress: F,
    ) -> AppResult<TurnOutcome>
    where
        F: FnMut(&[TranscriptEntry]),
    {
        let start = session.transcript().len();
        let result = transition(session, input, &self.validators)?;

        let status = match result {
            Transition::Greeted => TurnStatus::Greeted,
            Transition::Accepted(field) => TurnStatus::Accepted(field),
            Transition::Rejected(err) => TurnStatus::Rejected(err.field),
            Transition::Closed => TurnStatus::Closed,
            Transition::Exited => {
                info!(step = %session.step(), "Candidate ended the session");
                TurnStatus::Exited
            }
            Transition::Effect(effect) => {
                progress(session.transcript().since(start));
                self.run_effect(session, effect).await?
            }
        };

        if status == TurnStatus::Completed {
            info!(fields = session.candidate().len(), "Intake session completed");
        }

        Ok(TurnOutcome {
            status,
            step: session.step(),
            replies: session
                .transcript()
                .since(start)
                .iter()
                .filter(|entry| entry.role == TranscriptRole::Assistant)
                .map(|entry| entry.content.clone())
                .collect(),
        })
    }

    async fn run_effect(
        &self,
        session: &mut IntakeSession,
        effect: Effect,
    ) -> AppResult<TurnStatus> {
        match effect {
            Effect::GenerateQuestions { tech_stack } => {
                match self.generator.generate(&tech_stack).await {
                    Ok(questions) => {
                        session.complete_generation(&questions)?;
                        Ok(TurnStatus::Completed)
                    }
                    Err(err) => {
                        warn!(error = %err, "Question generation failed");
                        session.fail_generation()?;
                        Ok(TurnStatus::GenerationFailed)
                    }
                }
            }
        }
    }
}
