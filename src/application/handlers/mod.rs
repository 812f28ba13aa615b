//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod dialogue;

pub use dialogue::{
    GetSessionError, GetSessionHandler, GetSessionQuery, ProcessMessageCommand,
    ProcessMessageError, ProcessMessageHandler, ProcessMessageResult, StartSessionCommand,
    StartSessionError, StartSessionHandler, StartSessionResult,
};
