//! ProcessMessageHandler - Runs one dialogue turn.
//!
//! A turn is: load session, translate in, classify sentiment, compute the
//! transition, carry out its effect, save the session, translate out.
//! The new session is committed only after every step that must precede it
//! has succeeded; a failure leaves the stored session untouched.
//! Turns on the same session run one at a time, from load to save.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::domain::dialogue::{
    prompts, DialogueEngine, DialogueSession, Sentiment, Transition, TurnEffect, Utterance,
};
use crate::domain::foundation::SessionId;
use crate::domain::questions::{QuestionSelector, QuestionSet};
use crate::ports::{
    RecordStore, RecordStoreError, SaveReason, SentimentAnalyzer, SessionStore,
    SessionStoreError, StoredCandidate, TranslationError, Translator,
};

/// Command carrying one raw candidate message.
#[derive(Debug, Clone)]
pub struct ProcessMessageCommand {
    pub session_id: SessionId,
    pub text: String,
}

/// Outcome of a turn.
#[derive(Debug, Clone)]
pub struct ProcessMessageResult {
    /// Session as committed after this turn.
    pub session: DialogueSession,
    /// Reply in the candidate's language.
    pub reply: String,
    pub sentiment: Sentiment,
    /// True when the candidate used an exit keyword.
    pub ended: bool,
    /// Questions issued by this turn, if any.
    pub questions: Option<QuestionSet>,
}

#[derive(Debug, thiserror::Error)]
pub enum ProcessMessageError {
    #[error("Session not found: {0}")]
    SessionNotFound(SessionId),

    #[error("Session storage failed: {0}")]
    SessionStore(SessionStoreError),

    #[error("Could not read the message: {0}")]
    Translation(#[from] TranslationError),

    #[error("Failed to save candidate record: {0}")]
    RecordStore(#[from] RecordStoreError),
}

impl From<SessionStoreError> for ProcessMessageError {
    fn from(err: SessionStoreError) -> Self {
        match err {
            SessionStoreError::NotFound(id) => Self::SessionNotFound(id),
            other => Self::SessionStore(other),
        }
    }
}

/// Per-session turn locks. An entry lives only while a turn holds or awaits it.
#[derive(Default)]
struct TurnLocks {
    locks: Mutex<HashMap<SessionId, Arc<AsyncMutex<()>>>>,
}

impl TurnLocks {
    async fn acquire(&self, id: SessionId) -> TurnGuard<'_> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(|p| p.into_inner());
            Arc::clone(locks.entry(id).or_default())
        };
        let guard = lock.lock_owned().await;
        TurnGuard {
            locks: self,
            id,
            guard: Some(guard),
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.locks.lock().unwrap_or_else(|p| p.into_inner()).len()
    }
}

struct TurnGuard<'a> {
    locks: &'a TurnLocks,
    id: SessionId,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for TurnGuard<'_> {
    fn drop(&mut self) {
        drop(self.guard.take());
        let mut locks = self.locks.locks.lock().unwrap_or_else(|p| p.into_inner());
        // Only the map still refers to the lock: no turn is waiting on it
        if locks
            .get(&self.id)
            .is_some_and(|lock| Arc::strong_count(lock) == 1)
        {
            locks.remove(&self.id);
        }
    }
}

/// Handler for dialogue turns.
pub struct ProcessMessageHandler {
    engine: DialogueEngine,
    turns: TurnLocks,
    selector: Arc<Mutex<QuestionSelector>>,
    sessions: Arc<dyn SessionStore>,
    records: Arc<dyn RecordStore>,
    translator: Arc<dyn Translator>,
    sentiment: Option<Arc<dyn SentimentAnalyzer>>,
    decorate: bool,
}

impl ProcessMessageHandler {
    pub fn new(
        engine: DialogueEngine,
        selector: QuestionSelector,
        sessions: Arc<dyn SessionStore>,
        records: Arc<dyn RecordStore>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        Self {
            engine,
            turns: TurnLocks::default(),
            selector: Arc::new(Mutex::new(selector)),
            sessions,
            records,
            translator,
            sentiment: None,
            decorate: false,
        }
    }

    /// Enables sentiment classification. Without it every turn is neutral.
    pub fn with_sentiment(mut self, analyzer: Arc<dyn SentimentAnalyzer>) -> Self {
        self.sentiment = Some(analyzer);
        self
    }

    /// Adds sentiment remarks and the candidate's name to English replies
    /// before they are localized.
    pub fn with_reply_decoration(mut self, enabled: bool) -> Self {
        self.decorate = enabled;
        self
    }

    pub async fn handle(
        &self,
        cmd: ProcessMessageCommand,
    ) -> Result<ProcessMessageResult, ProcessMessageError> {
        let _turn = self.turns.acquire(cmd.session_id).await;
        let current = self.sessions.load(cmd.session_id).await?;
        let raw = cmd.text.trim();

        let source = current.language_pinned.then_some(&current.language);
        let working = self.translator.to_working(raw, source).await?;

        let mut observed = current.clone();
        observed.observe_language(working.language.clone());

        let sentiment = self.classify(&observed, &working.text).await;
        let utterance = Utterance::new(&working.text).with_sentiment(sentiment);

        tracing::debug!(
            session_id = %observed.id,
            stage = %observed.stage,
            language = %observed.language,
            "Processing message"
        );

        let transition = match self.step(&observed, utterance) {
            Ok(transition) => transition,
            Err(e) => {
                tracing::error!(
                    session_id = %observed.id,
                    stage = %observed.stage,
                    error = %e,
                    "Dialogue invariant violated; replying with fallback"
                );
                let reply = self.present(prompts::FALLBACK, sentiment, &current);
                let reply = self.localize(&reply, &current).await;
                return Ok(ProcessMessageResult {
                    session: current,
                    reply,
                    sentiment,
                    ended: false,
                    questions: None,
                });
            }
        };

        let Transition {
            session: mut next,
            reply,
            effect,
        } = transition;

        let ended = matches!(effect, TurnEffect::Exited { .. });
        let questions = self.apply_effect(&next, effect).await?;

        if next.stage != current.stage {
            tracing::info!(
                session_id = %next.id,
                from = %current.stage,
                to = %next.stage,
                "Stage changed"
            );
        }

        next.touch();
        self.sessions.save(&next).await?;

        let reply = self.present(&reply, sentiment, &next);
        let reply = self.localize(&reply, &next).await;

        Ok(ProcessMessageResult {
            session: next,
            reply,
            sentiment,
            ended,
            questions,
        })
    }

    fn step(
        &self,
        session: &DialogueSession,
        utterance: Utterance<'_>,
    ) -> Result<Transition, crate::domain::dialogue::DialogueError> {
        // Held only for the synchronous step, never across an await
        let mut selector = self
            .selector
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        self.engine.step(session, utterance, &mut *selector)
    }

    async fn classify(&self, session: &DialogueSession, text: &str) -> Sentiment {
        let Some(analyzer) = &self.sentiment else {
            return Sentiment::Neutral;
        };

        match analyzer.polarity(text).await {
            Ok(polarity) => Sentiment::from_polarity(polarity),
            Err(e) => {
                tracing::warn!(session_id = %session.id, error = %e, "Sentiment unavailable");
                Sentiment::Neutral
            }
        }
    }

    async fn apply_effect(
        &self,
        session: &DialogueSession,
        effect: TurnEffect,
    ) -> Result<Option<QuestionSet>, ProcessMessageError> {
        match effect {
            TurnEffect::None => Ok(None),
            TurnEffect::QuestionsIssued(questions) => Ok(Some(questions)),
            TurnEffect::StackCompleted(questions) => {
                self.persist(session, SaveReason::Completed).await?;
                Ok(Some(questions))
            }
            TurnEffect::Exited { persist } => {
                if persist {
                    self.persist(session, SaveReason::Exited).await?;
                }
                tracing::info!(session_id = %session.id, persisted = persist, "Candidate exited");
                Ok(None)
            }
        }
    }

    async fn persist(
        &self,
        session: &DialogueSession,
        reason: SaveReason,
    ) -> Result<(), ProcessMessageError> {
        let entry = StoredCandidate::new(session.id, session.record.clone(), reason);
        if let Err(e) = self.records.append(entry).await {
            tracing::error!(session_id = %session.id, error = %e, "Record append failed");
            return Err(e.into());
        }
        tracing::info!(
            session_id = %session.id,
            reason = ?reason,
            fields = session.record.collected_count(),
            "Candidate record saved"
        );
        Ok(())
    }

    fn present(&self, reply: &str, sentiment: Sentiment, session: &DialogueSession) -> String {
        if !self.decorate {
            return reply.to_string();
        }
        prompts::decorate(reply, sentiment, session.record.full_name())
    }

    async fn localize(&self, reply: &str, session: &DialogueSession) -> String {
        match self.translator.from_working(reply, &session.language).await {
            Ok(localized) => localized,
            Err(e) => {
                tracing::warn!(
                    session_id = %session.id,
                    language = %session.language,
                    error = %e,
                    "Reply not localized; sending English"
                );
                reply.to_string()
            }
        }
    }
}
