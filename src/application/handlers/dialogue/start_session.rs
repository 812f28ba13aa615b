//! StartSessionHandler - Command handler for opening a dialogue.

use std::sync::Arc;

use crate::domain::dialogue::{prompts, DialogueSession};
use crate::domain::foundation::{LanguageCode, SessionId};
use crate::ports::{SessionStore, SessionStoreError, Translator};

/// Command to open a new dialogue.
#[derive(Debug, Clone, Default)]
pub struct StartSessionCommand {
    /// Language chosen by the presentation layer. `None` enables detection.
    pub language: Option<LanguageCode>,
}

/// Result of opening a dialogue.
#[derive(Debug, Clone)]
pub struct StartSessionResult {
    pub session: DialogueSession,
    /// Opening line, localized when a language was pinned.
    pub reply: String,
}

#[derive(Debug, thiserror::Error)]
pub enum StartSessionError {
    #[error("Failed to store session: {0}")]
    SessionStore(#[from] SessionStoreError),
}

/// Handler for opening dialogues.
pub struct StartSessionHandler {
    sessions: Arc<dyn SessionStore>,
    translator: Arc<dyn Translator>,
}

impl StartSessionHandler {
    pub fn new(sessions: Arc<dyn SessionStore>, translator: Arc<dyn Translator>) -> Self {
        Self {
            sessions,
            translator,
        }
    }

    pub async fn handle(
        &self,
        cmd: StartSessionCommand,
    ) -> Result<StartSessionResult, StartSessionError> {
        let id = SessionId::new();
        let session = match cmd.language {
            Some(language) => DialogueSession::with_pinned_language(id, language),
            None => DialogueSession::new(id),
        };

        self.sessions.save(&session).await?;

        let reply = match self
            .translator
            .from_working(prompts::OPENING, &session.language)
            .await
        {
            Ok(localized) => localized,
            Err(e) => {
                tracing::warn!(session_id = %id, error = %e, "Opening line not localized");
                prompts::OPENING.to_string()
            }
        };

        tracing::info!(
            session_id = %id,
            language = %session.language,
            pinned = session.language_pinned,
            "Dialogue started"
        );

        Ok(StartSessionResult { session, reply })
    }
}
