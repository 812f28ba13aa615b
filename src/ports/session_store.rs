//! Session Store Port - Interface for persisting dialogue sessions.
//!
//! Sessions are saved after every committed turn so a conversation can be
//! resumed by its identifier.

use async_trait::async_trait;

use crate::domain::dialogue::DialogueSession;
use crate::domain::foundation::SessionId;

/// Errors that can occur during session storage operations
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    #[error("Failed to serialize session: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize session: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for persisting and loading dialogue sessions
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Save a session, replacing any previous version
    ///
    /// # Errors
    /// Returns `SessionStoreError` if save fails
    async fn save(&self, session: &DialogueSession) -> Result<(), SessionStoreError>;

    /// Load a session
    ///
    /// # Errors
    /// Returns `SessionStoreError::NotFound` if no session exists
    async fn load(&self, id: SessionId) -> Result<DialogueSession, SessionStoreError>;

    /// Check if a session exists
    async fn exists(&self, id: SessionId) -> Result<bool, SessionStoreError>;

    /// Delete a session. Deleting a missing session is not an error.
    async fn delete(&self, id: SessionId) -> Result<(), SessionStoreError>;
}
