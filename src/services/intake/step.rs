//! Intake Steps
//!
//! The fixed question sequence as a tagged enum. Step values outside the
//! sequence are unrepresentable; numeric indices are parsed once through
//! `TryFrom<usize>`.

use serde::{Deserialize, Serialize};
use talentscout_core::CandidateField;

use super::messages;
use crate::utils::error::AppError;

/// Where the conversation currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntakeStep {
    /// Waiting for the first message, which triggers the greeting
    Greeting,
    Name,
    Email,
    Phone,
    Experience,
    Position,
    Location,
    TechStack,
    /// Questions delivered; every further input gets the closing message
    Complete,
}

impl IntakeStep {
    /// Get the step index (0-based)
    pub fn index(&self) -> usize {
        match self {
            Self::Greeting => 0,
            Self::Name => 1,
            Self::Email => 2,
            Self::Phone => 3,
            Self::Experience => 4,
            Self::Position => 5,
            Self::Location => 6,
            Self::TechStack => 7,
            Self::Complete => 8,
        }
    }

    /// Get the next step
    pub fn next(&self) -> Self {
        match self {
            Self::Greeting => Self::Name,
            Self::Name => Self::Email,
            Self::Email => Self::Phone,
            Self::Phone => Self::Experience,
            Self::Experience => Self::Position,
            Self::Position => Self::Location,
            Self::Location => Self::TechStack,
            Self::TechStack => Self::Complete,
            Self::Complete => Self::Complete,
        }
    }

    /// The candidate field collected at this step, if any
    pub fn field(&self) -> Option<CandidateField> {
        match self {
            Self::Name => Some(CandidateField::Name),
            Self::Email => Some(CandidateField::Email),
            Self::Phone => Some(CandidateField::Phone),
            Self::Experience => Some(CandidateField::Experience),
            Self::Position => Some(CandidateField::Position),
            Self::Location => Some(CandidateField::Location),
            Self::TechStack => Some(CandidateField::TechStack),
            Self::Greeting | Self::Complete => None,
        }
    }

    /// The question asked when the conversation enters this step
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::Greeting => "",
            Self::Name => messages::ASK_NAME,
            Self::Email => messages::ASK_EMAIL,
            Self::Phone => messages::ASK_PHONE,
            Self::Experience => messages::ASK_EXPERIENCE,
            Self::Position => messages::ASK_POSITION,
            Self::Location => messages::ASK_LOCATION,
            Self::TechStack => messages::ASK_TECH_STACK,
            Self::Complete => messages::CLOSING,
        }
    }

    /// Get the display label for this step
    pub fn label(&self) -> &'static str {
        match self {
            Self::Greeting => "Greeting",
            Self::Complete => "Complete",
            other => other.field().map(|f| f.label()).unwrap_or(""),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete)
    }

    /// Parse a numeric step index, rejecting anything past `Complete`
    pub fn from_index(index: usize) -> Result<Self, AppError> {
        match index {
            0 => Ok(Self::Greeting),
            1 => Ok(Self::Name),
            2 => Ok(Self::Email),
            3 => Ok(Self::Phone),
            4 => Ok(Self::Experience),
            5 => Ok(Self::Position),
            6 => Ok(Self::Location),
            7 => Ok(Self::TechStack),
            8 => Ok(Self::Complete),
            other => Err(AppError::protocol(format!(
                "step index {} is outside the intake sequence",
                other
            ))),
        }
    }
}

impl std::fmt::Display for IntakeStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label(), self.index())
    }
}

impl TryFrom<usize> for IntakeStep {
    type Error = AppError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}
