//! Dialogue domain module.
//!
//! The stage machine that walks a candidate from greeting through profile
//! collection to tailored questions, plus the session value it operates on.

mod engine;
pub mod prompts;
mod sentiment;
mod session;
mod stage;

pub use engine::{DialogueConfig, DialogueEngine, DialogueError, Transition, TurnEffect, Utterance};
pub use sentiment::{Sentiment, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
pub use session::DialogueSession;
pub use stage::DialogueStage;
