//! Intake Session
//!
//! Owns the step, the candidate record and the transcript for one
//! conversation. Mutation happens only through `transition` and the
//! generation hooks below, so the record and transcript stay append-only.

use serde::{Deserialize, Serialize};
use talentscout_core::{CandidateField, CandidateRecord, Transcript};

use super::messages;
use super::step::IntakeStep;
use crate::utils::error::{AppError, AppResult};

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Active,
    /// The candidate left with an exit keyword
    Exited,
    /// Ended by a protocol violation; no further input is accepted
    Failed,
}

/// State scoped to a single candidate conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeSession {
    pub(crate) step: IntakeStep,
    pub(crate) candidate: CandidateRecord,
    pub(crate) transcript: Transcript,
    pub(crate) status: SessionStatus,
    /// Tech stack awaiting a generator result; never stored until it succeeds
    #[serde(skip)]
    pub(crate) pending_tech_stack: Option<String>,
}

impl Default for IntakeSession {
    fn default() -> Self {
        Self::new()
    }
}

impl IntakeSession {
    pub fn new() -> Self {
        Self {
            step: IntakeStep::Greeting,
            candidate: CandidateRecord::new(),
            transcript: Transcript::new(),
            status: SessionStatus::Active,
            pending_tech_stack: None,
        }
    }

    pub fn step(&self) -> IntakeStep {
        self.step
    }

    pub fn candidate(&self) -> &CandidateRecord {
        &self.candidate
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == SessionStatus::Active
    }

    pub fn is_complete(&self) -> bool {
        self.step.is_terminal()
    }

    /// True while a tech stack has been accepted but questions are not back yet
    pub fn is_awaiting_generation(&self) -> bool {
        self.pending_tech_stack.is_some()
    }

    pub(crate) fn exit(&mut self) {
        self.status = SessionStatus::Exited;
        self.pending_tech_stack = None;
    }

    pub(crate) fn fail(&mut self) {
        self.status = SessionStatus::Failed;
        self.pending_tech_stack = None;
    }

    /// Check that the session may take another input.
    ///
    /// The step must agree with the collected fields and no generation may be
    /// pending. Sessions rebuilt from serialized state can break either rule.
    pub fn check_accepts_input(&self) -> AppResult<()> {
        if !self.is_active() {
            return Err(AppError::protocol("session has already ended"));
        }
        if self.pending_tech_stack.is_some() {
            return Err(AppError::protocol(
                "question generation is still pending for this session",
            ));
        }
        let consistent = match self.step {
            IntakeStep::Greeting => self.candidate.is_empty(),
            IntakeStep::Complete => self.candidate.is_complete(),
            step => self.candidate.next_missing() == step.field(),
        };
        if !consistent {
            return Err(AppError::protocol(format!(
                "step {} does not match {} collected field(s)",
                self.step,
                self.candidate.len()
            )));
        }
        Ok(())
    }

    pub(crate) fn advance(&mut self) {
        self.step = self.step.next();
    }

    /// Store the pending tech stack, move to `Complete` and append the questions.
    pub fn complete_generation(&mut self, questions: &str) -> AppResult<()> {
        let tech_stack = self.take_pending()?;
        self.candidate.set(CandidateField::TechStack, tech_stack)?;
        self.advance();
        self.transcript
            .push_assistant(messages::questions_reply(questions));
        Ok(())
    }

    /// Drop the pending tech stack and apologise; the step stays at `TechStack`.
    pub fn fail_generation(&mut self) -> AppResult<()> {
        self.take_pending()?;
        self.transcript.push_assistant(messages::GENERATION_FAILED);
        Ok(())
    }

    fn take_pending(&mut self) -> AppResult<String> {
        self.pending_tech_stack
            .take()
            .ok_or_else(|| AppError::protocol("no question generation is pending"))
    }
}
