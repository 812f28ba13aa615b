//! Question selection configuration

use serde::Deserialize;

use crate::domain::questions::{
    SelectionLimits, UndersizedBankPolicy, MAX_QUESTIONS, MIN_QUESTIONS,
};

use super::error::ValidationError;

/// Bounds and seeding for the question selector
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionsConfig {
    #[serde(default = "default_min")]
    pub min_questions: usize,

    #[serde(default = "default_max")]
    pub max_questions: usize,

    /// Fixed seed for reproducible selection; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default)]
    pub undersized_bank: UndersizedBankPolicy,
}

impl QuestionsConfig {
    pub fn limits(&self) -> SelectionLimits {
        SelectionLimits {
            min: self.min_questions,
            max: self.max_questions,
            undersized: self.undersized_bank,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min_questions == 0 || self.min_questions > self.max_questions {
            return Err(ValidationError::InvalidQuestionBounds {
                min: self.min_questions,
                max: self.max_questions,
            });
        }
        Ok(())
    }
}

impl Default for QuestionsConfig {
    fn default() -> Self {
        Self {
            min_questions: default_min(),
            max_questions: default_max(),
            seed: None,
            undersized_bank: UndersizedBankPolicy::default(),
        }
    }
}

fn default_min() -> usize {
    MIN_QUESTIONS
}

fn default_max() -> usize {
    MAX_QUESTIONS
}
