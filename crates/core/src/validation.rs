//! Field Validation
//!
//! Pluggable per-field validators. The intake consults a [`ValidatorRegistry`]
//! before storing a value, so adding a rule for a field never touches the
//! transition table.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::candidate::CandidateField;

/// A rejected field value.
///
/// `message` is shown to the candidate verbatim, so it must be non-technical.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {field}: {message}")]
pub struct ValidationError {
    pub field: CandidateField,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: CandidateField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// A rule applied to a single field's raw value.
pub trait FieldValidator: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Check `value` for `field`
    fn validate(&self, field: CandidateField, value: &str) -> Result<(), ValidationError>;
}

/// Rejects empty or whitespace-only values.
#[derive(Debug, Default, Clone, Copy)]
pub struct NonBlank;

impl FieldValidator for NonBlank {
    fn name(&self) -> &'static str {
        "non_blank"
    }

    fn validate(&self, field: CandidateField, value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new(
                field,
                "I didn't catch that. Please type a response.",
            ));
        }
        Ok(())
    }
}

/// Simple `localpart@domain.tld` check.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmailFormat;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+").expect("email pattern is valid"))
}

/// Returns true when `value` looks like an email address
pub fn is_valid_email(value: &str) -> bool {
    email_pattern().is_match(value)
}

impl FieldValidator for EmailFormat {
    fn name(&self) -> &'static str {
        "email_format"
    }

    fn validate(&self, field: CandidateField, value: &str) -> Result<(), ValidationError> {
        if !is_valid_email(value) {
            return Err(ValidationError::new(
                field,
                "That doesn’t look like a valid email. Please try again.",
            ));
        }
        Ok(())
    }
}

/// Field → validators, applied in registration order.
#[derive(Default)]
pub struct ValidatorRegistry {
    validators: HashMap<CandidateField, Vec<Box<dyn FieldValidator>>>,
}

impl ValidatorRegistry {
    /// An empty registry: every value is accepted
    pub fn new() -> Self {
        Self::default()
    }

    /// Non-blank for every field, plus the email format check
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for field in CandidateField::ALL {
            registry.register(field, NonBlank);
        }
        registry.register(CandidateField::Email, EmailFormat);
        registry
    }

    /// Add a validator for `field`
    pub fn register(&mut self, field: CandidateField, validator: impl FieldValidator + 'static) {
        self.validators
            .entry(field)
            .or_default()
            .push(Box::new(validator));
    }

    /// Run every validator registered for `field`; the first failure wins
    pub fn validate(&self, field: CandidateField, value: &str) -> Result<(), ValidationError> {
        if let Some(validators) = self.validators.get(&field) {
            for validator in validators {
                validator.validate(field, value)?;
            }
        }
        Ok(())
    }

    /// Names of the validators registered for `field`
    pub fn validator_names(&self, field: CandidateField) -> Vec<&'static str> {
        self.validators
            .get(&field)
            .map(|v| v.iter().map(|x| x.name()).collect())
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatorRegistry")
            .field("fields", &self.validators.len())
            .finish()
    }
}
