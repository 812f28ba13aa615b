//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Commands (start a dialogue, process a message) are separated from the
//! query that reads a session snapshot.

pub mod handlers;

pub use handlers::{
    GetSessionError, GetSessionHandler, GetSessionQuery, ProcessMessageCommand,
    ProcessMessageError, ProcessMessageHandler, ProcessMessageResult, StartSessionCommand,
    StartSessionError, StartSessionHandler, StartSessionResult,
};
