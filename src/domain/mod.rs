//! Domain layer containing the dialogue logic and its value types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (IDs, timestamps, language codes, errors)
//! - `candidate` - Profile fields, validation rules and the candidate record
//! - `questions` - Question bank and seeded selection
//! - `dialogue` - Stage machine, session and transition engine

pub mod candidate;
pub mod dialogue;
pub mod foundation;
pub mod questions;
