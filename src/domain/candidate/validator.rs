//! Per-field validation rules.
//!
//! Each rule is a pure predicate over already-trimmed input. A failing rule
//! produces a [`FieldRejection`] whose message is shown to the candidate
//! verbatim before the same field is asked for again.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::field::CandidateField;

static NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z ]{2,50}$").expect("valid name regex"));

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._-]+@[A-Za-z0-9._-]+\.[A-Za-z0-9_]+$").expect("valid email regex")
});

// Applied after spaces are stripped: +<1-3 digit country code><6-14 digits>.
static PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+\d{1,3}\d{6,14}$").expect("valid phone regex"));

/// A field value that failed its rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldRejection {
    pub field: CandidateField,
    pub message: String,
}

impl FieldRejection {
    fn new(field: CandidateField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Letters and spaces only, 2-50 characters.
pub fn is_valid_name(input: &str) -> bool {
    NAME.is_match(input)
}

/// `local@domain.tld` with alphanumerics, dot, underscore and hyphen.
pub fn is_valid_email(input: &str) -> bool {
    EMAIL.is_match(input)
}

/// International number with a leading `+`; spaces between groups are ignored.
pub fn is_valid_phone(input: &str) -> bool {
    let compact: String = input.chars().filter(|c| *c != ' ').collect();
    PHONE.is_match(&compact)
}

/// Non-negative whole number written with digits only.
pub fn is_valid_years(input: &str) -> bool {
    !input.is_empty() && input.chars().all(|c| c.is_ascii_digit())
}

/// Same shape as a name: letters and spaces, 2-50 characters.
pub fn is_valid_location(input: &str) -> bool {
    NAME.is_match(input)
}

/// Applies the rule for `field` to `input`.
pub fn validate_field(field: CandidateField, input: &str) -> Result<(), FieldRejection> {
    if input.is_empty() {
        return Err(FieldRejection::new(
            field,
            format!("Please provide your {}.", field.label()),
        ));
    }

    let valid = match field {
        CandidateField::FullName => is_valid_name(input),
        CandidateField::Email => is_valid_email(input),
        CandidateField::Phone => is_valid_phone(input),
        CandidateField::YearsExperience => is_valid_years(input),
        CandidateField::DesiredPosition => true,
        CandidateField::CurrentLocation => is_valid_location(input),
    };

    if valid {
        Ok(())
    } else {
        Err(FieldRejection::new(field, rejection_message(field)))
    }
}

fn rejection_message(field: CandidateField) -> &'static str {
    match field {
        CandidateField::FullName => {
            "Please enter a valid name (only letters and spaces, 2–50 characters)."
        }
        CandidateField::Email => {
            "That doesn't look like a valid email. Please enter a valid email address (e.g. name@example.com)."
        }
        CandidateField::Phone => {
            "That doesn't look like a valid phone number. Please include country code (e.g. +91 9876543210)."
        }
        CandidateField::YearsExperience => {
            "Please enter a valid number for Years of Experience (0 or more)."
        }
        CandidateField::DesiredPosition => "Please provide your Desired Position(s).",
        CandidateField::CurrentLocation => {
            "Please enter a valid location (only letters and spaces, 2–50 characters)."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    mod names {
        use super::*;

        #[test]
        fn accepts_letters_and_spaces() {
            assert!(is_valid_name("John Doe"));
            assert!(is_valid_name("Al"));
        }

        #[test]
        fn rejects_digits_punctuation_and_bad_lengths() {
            assert!(!is_valid_name("J"));
            assert!(!is_valid_name("R2D2"));
            assert!(!is_valid_name("O'Brien"));
            assert!(!is_valid_name(&"a".repeat(51)));
        }
    }

    mod emails {
        use super::*;

        #[test]
        fn accepts_common_shapes() {
            assert!(is_valid_email("x@y.com"));
            assert!(is_valid_email("john.doe-1_a@mail.example.co"));
        }

        #[test]
        fn rejects_missing_at_or_dot() {
            assert!(!is_valid_email("notanemail"));
            assert!(!is_valid_email("not-an-email"));
            assert!(!is_valid_email("john@localhost"));
            assert!(!is_valid_email("john doe@example.com"));
            assert!(!is_valid_email("@example.com"));
        }
    }

    mod phones {
        use super::*;

        #[test]
        fn accepts_country_code_with_optional_spaces() {
            assert!(is_valid_phone("+1234567890"));
            assert!(is_valid_phone("+1 202 555 0147"));
            assert!(is_valid_phone("+91 98765 43210"));
            assert!(is_valid_phone("+44 20 7946 0958"));
        }

        #[test]
        fn rejects_missing_plus_letters_and_short_numbers() {
            assert!(!is_valid_phone("0123456789"));
            assert!(!is_valid_phone("abcd"));
            assert!(!is_valid_phone("+1 23"));
            assert!(!is_valid_phone("+1-202-555-0147"));
        }

        #[test]
        fn rejects_overlong_numbers() {
            assert!(!is_valid_phone(&format!("+{}", "9".repeat(18))));
        }
    }

    mod years {
        use super::*;

        #[test]
        fn accepts_digit_strings() {
            assert!(is_valid_years("0"));
            assert!(is_valid_years("3"));
            assert!(is_valid_years("25"));
        }

        #[test]
        fn rejects_signs_decimals_and_words() {
            assert!(!is_valid_years("-1"));
            assert!(!is_valid_years("2.5"));
            assert!(!is_valid_years("three"));
            assert!(!is_valid_years(""));
        }
    }

    mod validate_field {
        use super::*;

        #[test]
        fn empty_input_names_the_field() {
            let err = validate_field(CandidateField::DesiredPosition, "").unwrap_err();
            assert_eq!(err.field, CandidateField::DesiredPosition);
            assert_eq!(err.message, "Please provide your Desired Position(s).");
        }

        #[test]
        fn desired_position_accepts_free_text() {
            assert!(validate_field(CandidateField::DesiredPosition, "Software Engineer").is_ok());
            assert!(validate_field(CandidateField::DesiredPosition, "SRE / DevOps (L4)").is_ok());
        }

        #[test]
        fn email_rejection_mentions_valid_email() {
            let err = validate_field(CandidateField::Email, "not-an-email").unwrap_err();
            assert!(err.to_string().to_lowercase().contains("valid email"));
        }

        #[test]
        fn location_rejection_is_location_specific() {
            let err = validate_field(CandidateField::CurrentLocation, "12345").unwrap_err();
            assert!(err.message.contains("valid location"));
        }
    }

    proptest! {
        #[test]
        fn any_digit_string_is_valid_years(years in "[0-9]{1,6}") {
            prop_assert!(validate_field(CandidateField::YearsExperience, &years).is_ok());
        }

        #[test]
        fn names_with_digits_are_rejected(prefix in "[A-Za-z]{1,10}", digit in "[0-9]") {
            let name = format!("{}{}", prefix, digit);
            prop_assert!(validate_field(CandidateField::FullName, &name).is_err());
        }
    }
}
