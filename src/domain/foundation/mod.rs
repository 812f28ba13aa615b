//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the hiring assistant domain.

mod errors;
mod ids;
mod language;
mod state_machine;
mod timestamp;

pub use errors::ValidationError;
pub use ids::SessionId;
pub use language::LanguageCode;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
