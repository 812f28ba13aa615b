//! Dialogue stage machine.
//!
//! A dialogue moves strictly forward:
//! `Greeting -> Collect -> TechStack -> Questions`. `Questions` is absorbing;
//! exiting is not a stage change.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Where a dialogue currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DialogueStage {
    /// Waiting for the candidate to say "hi".
    #[default]
    Greeting,

    /// Collecting the sequential profile fields.
    Collect,

    /// Waiting for a comma-separated tech stack.
    TechStack,

    /// Questions issued; only exit (or optional resubmission) remains.
    Questions,
}

impl DialogueStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::Collect => "collect",
            Self::TechStack => "tech_stack",
            Self::Questions => "questions",
        }
    }
}

impl std::fmt::Display for DialogueStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl StateMachine for DialogueStage {
    fn can_transition_to(&self, target: &Self) -> bool {
        use DialogueStage::*;
        matches!(
            (self, target),
            (Greeting, Collect) | (Collect, TechStack) | (TechStack, Questions)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use DialogueStage::*;
        match self {
            Greeting => vec![Collect],
            Collect => vec![TechStack],
            TechStack => vec![Questions],
            Questions => vec![],
        }
    }
}
