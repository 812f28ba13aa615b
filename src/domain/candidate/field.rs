//! Candidate profile fields and their collection order.

use serde::{Deserialize, Serialize};

use super::validator::{self, FieldRejection};

/// One sequentially collected candidate attribute.
///
/// Fields are collected strictly in [`CandidateField::ORDERED`] order; each
/// carries the key it is stored under and the label shown in prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateField {
    FullName,
    Email,
    Phone,
    YearsExperience,
    DesiredPosition,
    CurrentLocation,
}

impl CandidateField {
    /// Collection order.
    pub const ORDERED: [CandidateField; 6] = [
        CandidateField::FullName,
        CandidateField::Email,
        CandidateField::Phone,
        CandidateField::YearsExperience,
        CandidateField::DesiredPosition,
        CandidateField::CurrentLocation,
    ];

    /// Number of sequential fields.
    pub const COUNT: usize = Self::ORDERED.len();

    /// Returns the field collected at `index`, if any.
    pub fn at(index: usize) -> Option<Self> {
        Self::ORDERED.get(index).copied()
    }

    /// Returns the zero-based collection position of this field.
    pub fn position(&self) -> usize {
        match self {
            Self::FullName => 0,
            Self::Email => 1,
            Self::Phone => 2,
            Self::YearsExperience => 3,
            Self::DesiredPosition => 4,
            Self::CurrentLocation => 5,
        }
    }

    /// Returns the field collected after this one.
    pub fn next(&self) -> Option<Self> {
        Self::at(self.position() + 1)
    }

    /// Storage key in candidate records.
    pub fn key(&self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::YearsExperience => "years_experience",
            Self::DesiredPosition => "desired_position",
            Self::CurrentLocation => "current_location",
        }
    }

    /// Human-readable label used in prompts.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email",
            Self::Phone => "Phone Number",
            Self::YearsExperience => "Years of Experience",
            Self::DesiredPosition => "Desired Position(s)",
            Self::CurrentLocation => "Current Location",
        }
    }

    /// Validates trimmed input for this field.
    pub fn validate(&self, input: &str) -> Result<(), FieldRejection> {
        validator::validate_field(*self, input)
    }
}
