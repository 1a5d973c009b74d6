//! TalentScout Core
//!
//! Foundational types for the TalentScout workspace: the candidate record,
//! the transcript, pluggable field validation and the core error type. This
//! crate has no dependency on the LLM layer or the application shell.
//!
//! ## Module Organization
//!
//! - `error` - Core error types (`CoreError`, `CoreResult`)
//! - `candidate` - Collected fields (`CandidateField`, `CandidateRecord`)
//! - `transcript` - Displayed message log (`Transcript`, `TranscriptEntry`)
//! - `validation` - Per-field validators (`FieldValidator`, `ValidatorRegistry`)

pub mod candidate;
pub mod error;
pub mod transcript;
pub mod validation;

// ── Error Types ────────────────────────────────────────────────────────
pub use error::{CoreError, CoreResult};

// ── Candidate Record ───────────────────────────────────────────────────
pub use candidate::{CandidateField, CandidateRecord};

// ── Transcript ─────────────────────────────────────────────────────────
pub use transcript::{Transcript, TranscriptEntry, TranscriptRole};

// ── Validation ─────────────────────────────────────────────────────────
pub use validation::{
    is_valid_email, EmailFormat, FieldValidator, NonBlank, ValidationError, ValidatorRegistry,
};
