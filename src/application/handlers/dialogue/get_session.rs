//! GetSessionHandler - Query handler for retrieving a dialogue snapshot.

use std::sync::Arc;

use crate::domain::dialogue::DialogueSession;
use crate::domain::foundation::SessionId;
use crate::ports::{SessionStore, SessionStoreError};

/// Query to get a session by ID.
#[derive(Debug, Clone)]
pub struct GetSessionQuery {
    pub session_id: SessionId,
}

#[derive(Debug, thiserror::Error)]
pub enum GetSessionError {
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    #[error("Failed to load session: {0}")]
    SessionStore(SessionStoreError),
}

impl From<SessionStoreError> for GetSessionError {
    fn from(err: SessionStoreError) -> Self {
        match err {
            SessionStoreError::NotFound(id) => Self::NotFound(id),
            other => Self::SessionStore(other),
        }
    }
}

/// Handler for retrieving session snapshots.
pub struct GetSessionHandler {
    sessions: Arc<dyn SessionStore>,
}

impl GetSessionHandler {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn handle(&self, query: GetSessionQuery) -> Result<DialogueSession, GetSessionError> {
        Ok(self.sessions.load(query.session_id).await?)
    }
}
