//! Per-conversation dialogue state.

use serde::{Deserialize, Serialize};

use crate::domain::candidate::{CandidateField, CandidateRecord};
use crate::domain::foundation::{LanguageCode, SessionId, Timestamp};

use super::stage::DialogueStage;

/// Everything the dialogue needs to resume a conversation.
///
/// Sessions are values: the engine returns an updated copy and the caller
/// decides when to commit it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueSession {
    pub id: SessionId,
    pub stage: DialogueStage,
    pub record: CandidateRecord,
    /// Index into [`CandidateField::ORDERED`] of the next field to collect.
    pub next_field: usize,
    /// Language of the candidate, used for outgoing replies.
    pub language: LanguageCode,
    /// Set when the presentation layer chose the language; detection is skipped.
    pub language_pinned: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl DialogueSession {
    /// Creates a session at the greeting stage with language detection enabled.
    pub fn new(id: SessionId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            stage: DialogueStage::default(),
            record: CandidateRecord::new(),
            next_field: 0,
            language: LanguageCode::english(),
            language_pinned: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Creates a session whose language is fixed for its lifetime.
    pub fn with_pinned_language(id: SessionId, language: LanguageCode) -> Self {
        Self {
            language,
            language_pinned: true,
            ..Self::new(id)
        }
    }

    /// The field the collect stage is waiting for.
    pub fn current_field(&self) -> Option<CandidateField> {
        CandidateField::at(self.next_field)
    }

    /// Remembers a detected language unless the language is pinned.
    pub fn observe_language(&mut self, detected: LanguageCode) {
        if !self.language_pinned {
            self.language = detected;
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
