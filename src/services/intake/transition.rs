//! Pure intake transition.
//!
//! `transition` maps one user input onto the session and reports what
//! happened. It performs no I/O: the only slow operation, question
//! generation, is returned as an [`Effect`] for the driver to run.

use talentscout_core::{CandidateField, ValidationError, ValidatorRegistry};
use tracing::{debug, warn};

use super::messages;
use super::session::IntakeSession;
use super::step::IntakeStep;
use crate::utils::error::{AppError, AppResult};

/// Work the driver must perform before the turn is finished.
///
/// `tech_stack` is the candidate's text exactly as typed; the stored field
/// is the trimmed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    GenerateQuestions { tech_stack: String },
}

/// Result of applying one input
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// First message; greeting sent, now asking for the name
    Greeted,
    /// Field stored and the next question asked
    Accepted(CandidateField),
    /// Input failed validation; step and record unchanged
    Rejected(ValidationError),
    /// Tech stack accepted pending generation
    Effect(Effect),
    /// Session is complete; closing message repeated
    Closed,
    /// Exit keyword received
    Exited,
}

/// Apply `input` to `session`.
///
/// Appends exactly one user entry plus the assistant reply for this turn.
/// Input to an ended session, while a generation is still pending, or to a
/// session whose step disagrees with its record is a protocol violation: it
/// appends nothing and ends an active session with `SessionStatus::Failed`.
pub fn transition(
    session: &mut IntakeSession,
    input: &str,
    validators: &ValidatorRegistry,
) -> AppResult<Transition> {
    if let Err(err) = session.check_accepts_input() {
        if session.is_active() {
            warn!(step = %session.step, error = %err, "Ending session after protocol violation");
            session.fail();
        }
        return Err(err);
    }

    session.transcript.push_user(input);

    if messages::is_exit_keyword(input) {
        debug!(step = %session.step, "Exit keyword received");
        session.transcript.push_assistant(messages::FAREWELL);
        session.exit();
        return Ok(Transition::Exited);
    }

    let field = match (session.step, session.step.field()) {
        (IntakeStep::Greeting, _) => {
            session.transcript.push_assistant(messages::GREETING);
            session.advance();
            return Ok(Transition::Greeted);
        }
        (_, Some(field)) => field,
        (_, None) => {
            session.transcript.push_assistant(messages::CLOSING);
            return Ok(Transition::Closed);
        }
    };

    let value = input.trim();
    if let Err(err) = validators.validate(field, value) {
        debug!(field = %field, "Input rejected");
        session
            .transcript
            .push_assistant(messages::rejection(&err.message, session.step.prompt()));
        return Ok(Transition::Rejected(err));
    }

    if field == CandidateField::TechStack {
        session.transcript.push_assistant(messages::GENERATING);
        session.pending_tech_stack = Some(value.to_string());
        debug!("Tech stack accepted, requesting questions");
        return Ok(Transition::Effect(Effect::GenerateQuestions {
            tech_stack: input.to_string(),
        }));
    }

    if let Err(err) = session.candidate.set(field, value) {
        session.fail();
        return Err(err.into());
    }
    session.advance();
    session.transcript.push_assistant(session.step.prompt());
    debug!(field = %field, step = %session.step, "Field accepted");
    Ok(Transition::Accepted(field))
}
