//! Candidate Record
//!
//! The structured output of an intake: seven free-text fields collected in a
//! fixed order. Fields are only ever added, each at most once.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// A field collected during the intake.
///
/// Declaration order is collection order; `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateField {
    Name,
    Email,
    Phone,
    Experience,
    Position,
    Location,
    TechStack,
}

impl CandidateField {
    /// All fields in collection order
    pub const ALL: [CandidateField; 7] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Experience,
        Self::Position,
        Self::Location,
        Self::TechStack,
    ];

    /// Get the string form used as the record key
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Experience => "experience",
            Self::Position => "position",
            Self::Location => "location",
            Self::TechStack => "tech_stack",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Full name",
            Self::Email => "Email address",
            Self::Phone => "Phone number",
            Self::Experience => "Years of experience",
            Self::Position => "Desired position",
            Self::Location => "Current location",
            Self::TechStack => "Tech stack",
        }
    }
}

impl fmt::Display for CandidateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CandidateField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| CoreError::unknown_field(s))
    }
}

/// Accumulated candidate answers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateRecord {
    fields: BTreeMap<CandidateField, String>,
}

impl CandidateRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value for `field`.
    ///
    /// Fails with a protocol violation when the field is already set or when
    /// an earlier field is still missing.
    pub fn set(&mut self, field: CandidateField, value: impl Into<String>) -> CoreResult<()> {
        if self.fields.contains_key(&field) {
            return Err(CoreError::protocol(format!("field '{}' is already set", field)));
        }
        match self.next_missing() {
            Some(expected) if expected == field => {
                self.fields.insert(field, value.into());
                Ok(())
            }
            Some(expected) => Err(CoreError::protocol(format!(
                "field '{}' set out of order, expected '{}'",
                field, expected
            ))),
            None => Err(CoreError::protocol("candidate record is already complete")),
        }
    }

    pub fn get(&self, field: CandidateField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: CandidateField) -> bool {
        self.fields.contains_key(&field)
    }

    /// The first field in collection order that has no value yet
    pub fn next_missing(&self) -> Option<CandidateField> {
        CandidateField::ALL
            .iter()
            .copied()
            .find(|f| !self.fields.contains_key(f))
    }

    pub fn is_complete(&self) -> bool {
        self.next_missing().is_none()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over collected fields in collection order
    pub fn iter(&self) -> impl Iterator<Item = (CandidateField, &str)> {
        self.fields.iter().map(|(f, v)| (*f, v.as_str()))
    }
}
