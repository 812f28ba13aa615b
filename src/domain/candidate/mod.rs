//! Candidate domain module.
//!
//! The profile fields collected by the dialogue, the rules each must pass,
//! and the record they accumulate into.

mod field;
mod record;
mod tech_stack;
mod validator;

pub use field::CandidateField;
pub use record::{CandidateRecord, RecordError};
pub use tech_stack::sanitize_tech_stack;
pub use validator::{
    is_valid_email, is_valid_location, is_valid_name, is_valid_phone, is_valid_years,
    validate_field, FieldRejection,
};
