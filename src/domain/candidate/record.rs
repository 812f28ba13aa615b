//! The candidate record built up over a dialogue.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::field::CandidateField;

/// Ways a record update can break the collection-order invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("Field {field:?} written out of order (expected {expected:?})")]
    OutOfOrder {
        field: CandidateField,
        expected: Option<CandidateField>,
    },

    #[error("Field {0:?} cannot be stored empty")]
    EmptyValue(CandidateField),

    #[error("Tech stack supplied before all profile fields were collected")]
    StackBeforeFields,

    #[error("Tech stack already recorded")]
    StackAlreadySet,

    #[error("Tech stack cannot be empty")]
    EmptyStack,
}

/// Collected candidate profile.
///
/// Serializes as a flat map keyed by [`CandidateField::key`] plus
/// `tech_stack`; fields not yet collected are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    years_experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    desired_position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    current_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tech_stack: Option<Vec<String>>,
}

impl CandidateRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored value for a field.
    pub fn get(&self, field: CandidateField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    pub fn full_name(&self) -> Option<&str> {
        self.get(CandidateField::FullName)
    }

    pub fn tech_stack(&self) -> Option<&[String]> {
        self.tech_stack.as_deref()
    }

    /// Number of sequential fields collected so far.
    pub fn collected_count(&self) -> usize {
        CandidateField::ORDERED
            .iter()
            .take_while(|field| self.slot(**field).is_some())
            .count()
    }

    /// The next field the record expects, if any remain.
    pub fn expected_field(&self) -> Option<CandidateField> {
        CandidateField::at(self.collected_count())
    }

    pub fn is_empty(&self) -> bool {
        self.collected_count() == 0 && self.tech_stack.is_none()
    }

    /// True once every sequential field and the tech stack are present.
    pub fn is_complete(&self) -> bool {
        self.collected_count() == CandidateField::COUNT && self.tech_stack.is_some()
    }

    /// Returns a copy of the record with `field` set.
    ///
    /// Only the next expected field may be written, and only once.
    pub fn with_field(
        &self,
        field: CandidateField,
        value: impl Into<String>,
    ) -> Result<Self, RecordError> {
        let expected = self.expected_field();
        if expected != Some(field) {
            return Err(RecordError::OutOfOrder { field, expected });
        }
        let value = value.into();
        if value.is_empty() {
            return Err(RecordError::EmptyValue(field));
        }

        let mut next = self.clone();
        *next.slot_mut(field) = Some(value);
        Ok(next)
    }

    /// Returns a copy of the record with the tech stack set.
    pub fn with_tech_stack(&self, stack: Vec<String>) -> Result<Self, RecordError> {
        if self.tech_stack.is_some() {
            return Err(RecordError::StackAlreadySet);
        }
        if self.collected_count() < CandidateField::COUNT {
            return Err(RecordError::StackBeforeFields);
        }
        if stack.is_empty() {
            return Err(RecordError::EmptyStack);
        }

        let mut next = self.clone();
        next.tech_stack = Some(stack);
        Ok(next)
    }

    fn slot(&self, field: CandidateField) -> &Option<String> {
        match field {
            CandidateField::FullName => &self.full_name,
            CandidateField::Email => &self.email,
            CandidateField::Phone => &self.phone,
            CandidateField::YearsExperience => &self.years_experience,
            CandidateField::DesiredPosition => &self.desired_position,
            CandidateField::CurrentLocation => &self.current_location,
        }
    }

    fn slot_mut(&mut self, field: CandidateField) -> &mut Option<String> {
        match field {
            CandidateField::FullName => &mut self.full_name,
            CandidateField::Email => &mut self.email,
            CandidateField::Phone => &mut self.phone,
            CandidateField::YearsExperience => &mut self.years_experience,
            CandidateField::DesiredPosition => &mut self.desired_position,
            CandidateField::CurrentLocation => &mut self.current_location,
        }
    }
}
