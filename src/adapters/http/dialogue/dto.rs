//! Request and response bodies for the dialogue endpoints.

use serde::{Deserialize, Serialize};

use crate::application::ProcessMessageResult;
use crate::domain::candidate::CandidateRecord;
use crate::domain::dialogue::{DialogueSession, DialogueStage, Sentiment};

use super::transcript::TranscriptEntry;

// ════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /sessions`. An empty body is accepted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StartSessionRequest {
    #[serde(default)]
    pub language: Option<String>,
}

/// Body of `POST /sessions/:id/messages`.
#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageRequest {
    pub text: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartSessionResponse {
    pub session_id: String,
    pub reply: String,
    pub stage: DialogueStage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub reply: String,
    pub stage: DialogueStage,
    pub sentiment: Sentiment,
    pub ended: bool,
}

impl From<&ProcessMessageResult> for MessageResponse {
    fn from(result: &ProcessMessageResult) -> Self {
        Self {
            reply: result.reply.clone(),
            stage: result.session.stage,
            sentiment: result.sentiment,
            ended: result.ended,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session_id: String,
    pub stage: DialogueStage,
    pub language: String,
    pub record: CandidateRecord,
}

impl From<DialogueSession> for SessionResponse {
    fn from(session: DialogueSession) -> Self {
        Self {
            session_id: session.id.to_string(),
            stage: session.stage,
            language: session.language.to_string(),
            record: session.record,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptResponse {
    pub entries: Vec<TranscriptEntry>,
}

/// Error body shared by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self::new("NOT_FOUND", format!("{} not found: {}", resource_type, id))
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new("SERVICE_UNAVAILABLE", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }

    /// Attaches the underlying error text.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(serde_json::Value::String(details.into()));
        self
    }

    fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }
}
