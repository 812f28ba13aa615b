//! Language code value object.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

static LANGUAGE_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z]{2,3}(-[a-z0-9]{2,8})?$").expect("valid language regex"));

/// Lower-case ISO 639 language code with an optional region subtag (`en`, `zh-cn`).
///
/// The dialogue core always works in [`LanguageCode::english`]; other codes
/// only travel between the session and the translation collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Parses and normalizes a language code.
    pub fn new(code: impl AsRef<str>) -> Result<Self, ValidationError> {
        let normalized = code.as_ref().trim().to_lowercase().replace('_', "-");
        if normalized.is_empty() {
            return Err(ValidationError::empty_field("language"));
        }
        if !LANGUAGE_CODE.is_match(&normalized) {
            return Err(ValidationError::invalid_format(
                "language",
                format!("'{}' is not an ISO 639 code", code.as_ref()),
            ));
        }
        Ok(Self(normalized))
    }

    /// The working language of the dialogue core.
    pub fn english() -> Self {
        Self("en".to_string())
    }

    pub fn is_english(&self) -> bool {
        self.0 == "en" || self.0.starts_with("en-")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LanguageCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LanguageCode> for String {
    fn from(code: LanguageCode) -> Self {
        code.0
    }
}
