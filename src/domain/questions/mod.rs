//! Question domain module.
//!
//! The technology-keyed question bank and the seeded selector that turns a
//! declared tech stack into interview questions.

mod bank;
mod selector;

pub use bank::QuestionBank;
pub use selector::{
    QuestionSelector, QuestionSet, SelectionLimits, TechQuestions, UndersizedBankPolicy,
    MAX_QUESTIONS, MIN_QUESTIONS, NO_TECHNOLOGIES_KEY,
};
