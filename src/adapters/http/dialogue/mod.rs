//! HTTP adapter for dialogue endpoints.

mod dto;
mod handlers;
mod routes;
mod transcript;

pub use dto::{
    ErrorResponse, MessageResponse, SendMessageRequest, SessionResponse, StartSessionRequest,
    StartSessionResponse, TranscriptResponse,
};
pub use handlers::DialogueHandlers;
pub use routes::dialogue_routes;
pub use transcript::{
    Sender, TranscriptEntry, TranscriptStore, MAX_TRANSCRIPT_ENTRIES, MAX_TRANSCRIPT_SESSIONS,
};
