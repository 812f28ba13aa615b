//! Dialogue command and query handlers.

mod get_session;
mod process_message;
mod start_session;

pub use get_session::{GetSessionError, GetSessionHandler, GetSessionQuery};
pub use process_message::{
    ProcessMessageCommand, ProcessMessageError, ProcessMessageHandler, ProcessMessageResult,
};
pub use start_session::{
    StartSessionCommand, StartSessionError, StartSessionHandler, StartSessionResult,
};
