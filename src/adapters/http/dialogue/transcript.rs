//! Display transcript kept by the HTTP transport.
//!
//! The dialogue core never reads it; it exists so a client can redraw the
//! conversation. Each session keeps at most [`MAX_TRANSCRIPT_ENTRIES`], and
//! once [`MAX_TRANSCRIPT_SESSIONS`] sessions are tracked the oldest session's
//! transcript is dropped to make room for a new one.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::SessionId;

pub const MAX_TRANSCRIPT_ENTRIES: usize = 200;

pub const MAX_TRANSCRIPT_SESSIONS: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    You,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub sender: Sender,
    pub text: String,
}

#[derive(Debug, Default)]
struct Transcripts {
    by_session: HashMap<SessionId, VecDeque<TranscriptEntry>>,
    // Session ids in the order their transcripts were started
    started: VecDeque<SessionId>,
}

/// Per-session chronological transcripts, oldest entries dropped first.
#[derive(Debug, Clone)]
pub struct TranscriptStore {
    inner: Arc<RwLock<Transcripts>>,
    session_capacity: usize,
}

impl Default for TranscriptStore {
    fn default() -> Self {
        Self::with_session_capacity(MAX_TRANSCRIPT_SESSIONS)
    }
}

impl TranscriptStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session_capacity(session_capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Transcripts::default())),
            session_capacity: session_capacity.max(1),
        }
    }

    pub async fn push(&self, id: SessionId, sender: Sender, text: impl Into<String>) {
        let mut inner = self.inner.write().await;
        if !inner.by_session.contains_key(&id) {
            while inner.by_session.len() >= self.session_capacity {
                let Some(oldest) = inner.started.pop_front() else {
                    break;
                };
                inner.by_session.remove(&oldest);
                tracing::debug!(session_id = %oldest, "Transcript evicted");
            }
            inner.started.push_back(id);
        }

        let transcript = inner.by_session.entry(id).or_default();
        if transcript.len() == MAX_TRANSCRIPT_ENTRIES {
            transcript.pop_front();
        }
        transcript.push_back(TranscriptEntry {
            sender,
            text: text.into(),
        });
    }

    pub async fn get(&self, id: SessionId) -> Vec<TranscriptEntry> {
        self.inner
            .read()
            .await
            .by_session
            .get(&id)
            .map(|transcript| transcript.iter().cloned().collect())
            .unwrap_or_default()
    }

    #[cfg(test)]
    async fn session_count(&self) -> usize {
        self.inner.read().await.by_session.len()
    }
}
