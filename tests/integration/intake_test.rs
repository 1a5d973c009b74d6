//! Intake Integration Tests
//!
//! Drives complete screening conversations through `IntakeMachine`:
//! - Field collection order and storage
//! - Email validation and re-prompts
//! - Exit keywords from any step
//! - Transcript bookkeeping
//! - Completion, terminal idempotence and generation failure recovery
//!
//! A scripted generator stands in for the language model.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use talentscout::services::intake::messages;
use talentscout::services::intake::{
    GenerationError, IntakeMachine, IntakeSession, IntakeStep, QuestionGenerator, SessionStatus,
    TurnStatus,
};
use talentscout::AppError;
use talentscout_core::{CandidateField, TranscriptRole};
use talentscout_llm::LlmError;

// ============================================================================
// Helpers
// ============================================================================

const QUESTIONS: &str = "**Python**\n- What is a generator?\n\n**SQL**\n- What does GROUP BY do?";

struct ScriptedGenerator {
    results: Mutex<Vec<Result<String, GenerationError>>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    fn new(results: Vec<Result<String, GenerationError>>) -> Arc<Self> {
        Arc::new(Self {
            results: Mutex::new(results),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn succeeding() -> Arc<Self> {
        Self::new(vec![Ok(QUESTIONS.to_string())])
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuestionGenerator for ScriptedGenerator {
    async fn generate(&self, tech_stack: &str) -> Result<String, GenerationError> {
        self.calls.lock().unwrap().push(tech_stack.to_string());
        let mut results = self.results.lock().unwrap();
        if results.is_empty() {
            Err(GenerationError::EmptyResponse)
        } else {
            results.remove(0)
        }
    }
}

const ANSWERS: [&str; 6] = [
    "John Doe",
    "john@doe.com",
    "1234567890",
    "3",
    "Backend Engineer",
    "Remote",
];

/// Greet, then answer `count` of the field questions.
async fn advance(machine: &IntakeMachine, count: usize) -> IntakeSession {
    let mut session = machine.start_session();
    machine.handle_turn(&mut session, "hi").await.unwrap();
    for answer in ANSWERS.iter().take(count) {
        machine.handle_turn(&mut session, answer).await.unwrap();
    }
    session
}

// ============================================================================
// Full conversation
// ============================================================================

#[tokio::test]
async fn test_end_to_end_screening() {
    let generator = ScriptedGenerator::succeeding();
    let machine = IntakeMachine::new(generator.clone());
    let mut session = advance(&machine, 6).await;

    let outcome = machine.handle_turn(&mut session, "Python, SQL").await.unwrap();

    assert_eq!(outcome.status, TurnStatus::Completed);
    assert_eq!(session.step(), IntakeStep::Complete);
    assert_eq!(session.step().index(), 8);

    let candidate = session.candidate();
    assert!(candidate.is_complete());
    let expected = [
        (CandidateField::Name, "John Doe"),
        (CandidateField::Email, "john@doe.com"),
        (CandidateField::Phone, "1234567890"),
        (CandidateField::Experience, "3"),
        (CandidateField::Position, "Backend Engineer"),
        (CandidateField::Location, "Remote"),
        (CandidateField::TechStack, "Python, SQL"),
    ];
    for (field, value) in expected {
        assert_eq!(candidate.get(field), Some(value), "field {field}");
    }

    assert_eq!(generator.calls(), vec!["Python, SQL".to_string()]);
    let last = session.transcript().last().unwrap();
    assert_eq!(last.role, TranscriptRole::Assistant);
    assert!(last.content.contains(QUESTIONS));
}

#[tokio::test]
async fn test_each_field_step_stores_and_advances() {
    let machine = IntakeMachine::new(ScriptedGenerator::succeeding());
    let mut session = advance(&machine, 0).await;

    for (i, answer) in ANSWERS.iter().enumerate() {
        let step = session.step();
        let field = step.field().unwrap();
        let outcome = machine.handle_turn(&mut session, answer).await.unwrap();

        assert_eq!(outcome.status, TurnStatus::Accepted(field));
        assert_eq!(session.candidate().get(field), Some(*answer));
        assert_eq!(session.step().index(), step.index() + 1);
        assert_eq!(session.candidate().len(), i + 1);
    }
    assert_eq!(session.step(), IntakeStep::TechStack);
}

// ============================================================================
// Email validation
// ============================================================================

#[tokio::test]
async fn test_valid_email_accepted() {
    let machine = IntakeMachine::new(ScriptedGenerator::succeeding());
    let mut session = advance(&machine, 1).await;

    machine.handle_turn(&mut session, "a@b.com").await.unwrap();
    assert_eq!(session.candidate().get(CandidateField::Email), Some("a@b.com"));
    assert_eq!(session.step(), IntakeStep::Phone);
}

#[tokio::test]
async fn test_invalid_email_rejected_without_mutation() {
    let machine = IntakeMachine::new(ScriptedGenerator::succeeding());
    let mut session = advance(&machine, 1).await;
    let fields_before = session.candidate().clone();

    let outcome = machine.handle_turn(&mut session, "not-an-email").await.unwrap();

    assert_eq!(outcome.status, TurnStatus::Rejected(CandidateField::Email));
    assert_eq!(session.step(), IntakeStep::Email);
    assert_eq!(session.candidate(), &fields_before);
    assert!(!session.candidate().contains(CandidateField::Email));

    // Recovers on the next valid answer
    machine.handle_turn(&mut session, "john@doe.com").await.unwrap();
    assert_eq!(session.step(), IntakeStep::Phone);
}

// ============================================================================
// Exit keywords
// ============================================================================

#[tokio::test]
async fn test_exit_keywords_from_any_step() {
    for (steps_answered, keyword) in [(0, "EXIT"), (2, "Bye"), (4, "end"), (6, "quit")] {
        let generator = ScriptedGenerator::succeeding();
        let machine = IntakeMachine::new(generator.clone());
        let mut session = advance(&machine, steps_answered).await;
        let step = session.step();
        let record = session.candidate().clone();

        let outcome = machine.handle_turn(&mut session, keyword).await.unwrap();

        assert_eq!(outcome.status, TurnStatus::Exited);
        assert_eq!(outcome.replies, vec![messages::FAREWELL.to_string()]);
        assert_eq!(session.status(), SessionStatus::Exited);
        assert_eq!(session.step(), step);
        assert_eq!(session.candidate(), &record);
        assert!(generator.calls().is_empty());
    }
}

#[tokio::test]
async fn test_exit_after_completion() {
    let generator = ScriptedGenerator::succeeding();
    let machine = IntakeMachine::new(generator.clone());
    let mut session = advance(&machine, 6).await;
    machine.handle_turn(&mut session, "Python, SQL").await.unwrap();
    let record = session.candidate().clone();

    let outcome = machine.handle_turn(&mut session, "END").await.unwrap();

    assert_eq!(outcome.status, TurnStatus::Exited);
    assert_eq!(outcome.replies, vec![messages::FAREWELL.to_string()]);
    assert_eq!(session.status(), SessionStatus::Exited);
    assert_eq!(session.step(), IntakeStep::Complete);
    assert_eq!(session.candidate(), &record);
    assert_eq!(generator.calls().len(), 1);
}

#[tokio::test]
async fn test_exit_before_greeting() {
    let machine = IntakeMachine::new(ScriptedGenerator::succeeding());
    let mut session = machine.start_session();

    let outcome = machine.handle_turn(&mut session, "bye").await.unwrap();
    assert_eq!(outcome.status, TurnStatus::Exited);
    assert_eq!(session.step(), IntakeStep::Greeting);
}

#[tokio::test]
async fn test_input_after_exit_is_rejected() {
    let machine = IntakeMachine::new(ScriptedGenerator::succeeding());
    let mut session = advance(&machine, 2).await;
    machine.handle_turn(&mut session, "exit").await.unwrap();
    let entries = session.transcript().len();

    let err = machine.handle_turn(&mut session, "1234567890").await.unwrap_err();

    assert!(matches!(err, AppError::Protocol(_)));
    assert_eq!(session.transcript().len(), entries);
    assert!(!session.candidate().contains(CandidateField::Phone));
}

#[tokio::test]
async fn test_restored_session_out_of_step_is_ended() {
    let machine = IntakeMachine::new(ScriptedGenerator::succeeding());
    let mut session: IntakeSession = serde_json::from_str(
        r#"{"step":"phone","candidate":{},"transcript":[],"status":"active"}"#,
    )
    .unwrap();

    for _ in 0..2 {
        let err = machine.handle_turn(&mut session, "555").await.unwrap_err();
        assert!(matches!(err, AppError::Protocol(_)));
        assert_eq!(session.status(), SessionStatus::Failed);
        assert!(session.transcript().is_empty());
        assert!(session.candidate().is_empty());
    }
}

#[tokio::test]
async fn test_generator_receives_tech_stack_as_typed() {
    let generator = ScriptedGenerator::succeeding();
    let machine = IntakeMachine::new(generator.clone());
    let mut session = advance(&machine, 6).await;

    machine.handle_turn(&mut session, "  Python,  SQL ").await.unwrap();

    assert_eq!(generator.calls(), vec!["  Python,  SQL ".to_string()]);
    assert_eq!(
        session.candidate().get(CandidateField::TechStack),
        Some("Python,  SQL")
    );
}

// ============================================================================
// Transcript bookkeeping
// ============================================================================

#[tokio::test]
async fn test_transcript_counts() {
    let machine = IntakeMachine::new(ScriptedGenerator::succeeding());
    let mut session = machine.start_session();

    let inputs = ["hi", "John Doe", "nope", "john@doe.com", "1234567890"];
    for input in inputs {
        let outcome = machine.handle_turn(&mut session, input).await.unwrap();
        assert_eq!(outcome.replies.len(), 1);
    }
    let transcript = session.transcript();
    assert_eq!(transcript.count(TranscriptRole::User), inputs.len());
    assert_eq!(transcript.count(TranscriptRole::Assistant), inputs.len());

    // User entries keep the raw input in order
    let user_inputs: Vec<&str> = transcript
        .entries()
        .iter()
        .filter(|e| e.role == TranscriptRole::User)
        .map(|e| e.content.as_str())
        .collect();
    assert_eq!(user_inputs, inputs.to_vec());
}

#[tokio::test]
async fn test_tech_stack_turn_appends_progress_then_result() {
    let machine = IntakeMachine::new(ScriptedGenerator::succeeding());
    let mut session = advance(&machine, 6).await;
    let before = session.transcript().len();

    let outcome = machine.handle_turn(&mut session, "Python, SQL").await.unwrap();

    let appended = session.transcript().since(before);
    assert_eq!(appended.len(), 3);
    assert_eq!(appended[0].role, TranscriptRole::User);
    assert_eq!(appended[1].content, messages::GENERATING);
    assert_eq!(outcome.replies.len(), 2);
    assert_eq!(outcome.replies[1], messages::questions_reply(QUESTIONS));
}

// ============================================================================
// Terminal state
// ============================================================================

#[tokio::test]
async fn test_complete_session_is_idempotent() {
    let generator = ScriptedGenerator::succeeding();
    let machine = IntakeMachine::new(generator.clone());
    let mut session = advance(&machine, 6).await;
    machine.handle_turn(&mut session, "Python, SQL").await.unwrap();
    let record = session.candidate().clone();

    for input in ["thanks", "what next?", "Python, SQL"] {
        let outcome = machine.handle_turn(&mut session, input).await.unwrap();
        assert_eq!(outcome.status, TurnStatus::Closed);
        assert_eq!(outcome.replies, vec![messages::CLOSING.to_string()]);
        assert_eq!(session.step(), IntakeStep::Complete);
        assert_eq!(session.candidate(), &record);
    }
    assert_eq!(generator.calls().len(), 1);
}

// ============================================================================
// Generation failure
// ============================================================================

#[tokio::test]
async fn test_provider_failure_then_retry() {
    let generator = ScriptedGenerator::new(vec![
        Err(GenerationError::Provider(LlmError::AuthenticationFailed {
            message: "openai: Invalid API key".to_string(),
        })),
        Ok(QUESTIONS.to_string()),
    ]);
    let machine = IntakeMachine::new(generator.clone());
    let mut session = advance(&machine, 6).await;

    let failed = machine.handle_turn(&mut session, "Python, SQL").await.unwrap();
    assert_eq!(failed.status, TurnStatus::GenerationFailed);
    assert_eq!(session.step().index(), 7);
    assert!(!session.candidate().contains(CandidateField::TechStack));
    assert_eq!(
        session.transcript().last().unwrap().content,
        messages::GENERATION_FAILED
    );
    assert!(session
        .transcript()
        .entries()
        .iter()
        .all(|e| !e.content.contains("Invalid API key")));

    let retried = machine.handle_turn(&mut session, "Python, SQL").await.unwrap();
    assert_eq!(retried.status, TurnStatus::Completed);
    assert_eq!(session.step(), IntakeStep::Complete);
    assert_eq!(
        session.candidate().get(CandidateField::TechStack),
        Some("Python, SQL")
    );
    assert_eq!(generator.calls().len(), 2);
}

#[tokio::test]
async fn test_timeout_failure_keeps_session_usable() {
    let generator = ScriptedGenerator::new(vec![Err(GenerationError::Timeout(
        std::time::Duration::from_secs(60),
    ))]);
    let machine = IntakeMachine::new(generator);
    let mut session = advance(&machine, 6).await;

    machine.handle_turn(&mut session, "Go").await.unwrap();
    assert!(session.is_active());
    assert!(!session.is_awaiting_generation());

    let outcome = machine.handle_turn(&mut session, "bye").await.unwrap();
    assert_eq!(outcome.status, TurnStatus::Exited);
}
