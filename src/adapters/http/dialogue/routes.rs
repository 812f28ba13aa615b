//! HTTP routes for dialogue endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_session, get_transcript, send_message, start_session, DialogueHandlers};

/// Creates the dialogue router with all endpoints.
pub fn dialogue_routes(handlers: DialogueHandlers) -> Router {
    Router::new()
        .route("/sessions", post(start_session))
        .route("/sessions/:id", get(get_session))
        .route("/sessions/:id/messages", post(send_message))
        .route("/sessions/:id/transcript", get(get_transcript))
        .with_state(handlers)
}
