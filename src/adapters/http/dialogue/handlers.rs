//! HTTP handlers for dialogue endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::{
    GetSessionError, GetSessionHandler, GetSessionQuery, ProcessMessageCommand,
    ProcessMessageError, ProcessMessageHandler, StartSessionCommand, StartSessionError,
    StartSessionHandler,
};
use crate::domain::foundation::{LanguageCode, SessionId};

use super::dto::{
    ErrorResponse, MessageResponse, SendMessageRequest, SessionResponse, StartSessionRequest,
    StartSessionResponse, TranscriptResponse,
};
use super::transcript::{Sender, TranscriptStore};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct DialogueHandlers {
    start_handler: Arc<StartSessionHandler>,
    process_handler: Arc<ProcessMessageHandler>,
    get_handler: Arc<GetSessionHandler>,
    transcripts: TranscriptStore,
    verbose_errors: bool,
}

impl DialogueHandlers {
    pub fn new(
        start_handler: Arc<StartSessionHandler>,
        process_handler: Arc<ProcessMessageHandler>,
        get_handler: Arc<GetSessionHandler>,
    ) -> Self {
        Self {
            start_handler,
            process_handler,
            get_handler,
            transcripts: TranscriptStore::new(),
            verbose_errors: false,
        }
    }

    /// Includes underlying error text in error bodies.
    pub fn with_verbose_errors(mut self, verbose: bool) -> Self {
        self.verbose_errors = verbose;
        self
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /sessions - Start a dialogue
pub async fn start_session(
    State(handlers): State<DialogueHandlers>,
    body: Option<Json<StartSessionRequest>>,
) -> Response {
    let req = body.map(|Json(req)| req).unwrap_or_default();

    let language = match req.language.as_deref().map(LanguageCode::new).transpose() {
        Ok(language) => language,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(e.to_string())),
            )
                .into_response()
        }
    };

    match handlers
        .start_handler
        .handle(StartSessionCommand { language })
        .await
    {
        Ok(result) => {
            handlers
                .transcripts
                .push(result.session.id, Sender::Bot, result.reply.clone())
                .await;
            let response = StartSessionResponse {
                session_id: result.session.id.to_string(),
                reply: result.reply,
                stage: result.session.stage,
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_start_error(e, handlers.verbose_errors),
    }
}

/// POST /sessions/:id/messages - Send one candidate message
pub async fn send_message(
    State(handlers): State<DialogueHandlers>,
    Path(session_id): Path<String>,
    Json(req): Json<SendMessageRequest>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = ProcessMessageCommand {
        session_id,
        text: req.text.clone(),
    };

    match handlers.process_handler.handle(cmd).await {
        Ok(result) => {
            handlers
                .transcripts
                .push(session_id, Sender::You, req.text.trim())
                .await;
            handlers
                .transcripts
                .push(session_id, Sender::Bot, result.reply.clone())
                .await;
            (StatusCode::OK, Json(MessageResponse::from(&result))).into_response()
        }
        Err(e) => handle_process_error(e, handlers.verbose_errors),
    }
}

/// GET /sessions/:id - Session snapshot
pub async fn get_session(
    State(handlers): State<DialogueHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .get_handler
        .handle(GetSessionQuery { session_id })
        .await
    {
        Ok(session) => (StatusCode::OK, Json(SessionResponse::from(session))).into_response(),
        Err(e) => handle_get_error(e, handlers.verbose_errors),
    }
}

/// GET /sessions/:id/transcript - Display transcript
pub async fn get_transcript(
    State(handlers): State<DialogueHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    // The transcript is transport state; existence is checked against the store
    if let Err(e) = handlers
        .get_handler
        .handle(GetSessionQuery { session_id })
        .await
    {
        return handle_get_error(e, handlers.verbose_errors);
    }

    let entries = handlers.transcripts.get(session_id).await;
    (StatusCode::OK, Json(TranscriptResponse { entries })).into_response()
}

fn parse_session_id(raw: &str) -> Result<SessionId, Response> {
    raw.parse::<SessionId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid session ID")),
        )
            .into_response()
    })
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn error_response(status: StatusCode, body: ErrorResponse, detail: String, verbose: bool) -> Response {
    let body = if verbose { body.with_details(detail) } else { body };
    (status, Json(body)).into_response()
}

fn handle_start_error(error: StartSessionError, verbose: bool) -> Response {
    tracing::error!(error = %error, "Failed to start session");
    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorResponse::internal("Could not start a session"),
        error.to_string(),
        verbose,
    )
}

fn handle_process_error(error: ProcessMessageError, verbose: bool) -> Response {
    let detail = error.to_string();
    match error {
        ProcessMessageError::SessionNotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Session", &id.to_string())),
        )
            .into_response(),
        ProcessMessageError::Translation(_) => {
            tracing::warn!(error = %detail, "Translation unavailable");
            error_response(
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorResponse::unavailable("Translation is unavailable, please try again"),
                detail,
                verbose,
            )
        }
        ProcessMessageError::RecordStore(_) | ProcessMessageError::SessionStore(_) => {
            tracing::error!(error = %detail, "Storage failure");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::internal("Could not save your progress, please try again"),
                detail,
                verbose,
            )
        }
    }
}

fn handle_get_error(error: GetSessionError, verbose: bool) -> Response {
    match error {
        GetSessionError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Session", &id.to_string())),
        )
            .into_response(),
        GetSessionError::SessionStore(e) => {
            tracing::error!(error = %e, "Failed to load session");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::internal("Could not load session"),
                e.to_string(),
                verbose,
            )
        }
    }
}
