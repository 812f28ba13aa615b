//! Translator Port - Moves text between the candidate's language and English.
//!
//! The dialogue core only ever sees English. Incoming text is normalized
//! before a turn and replies are localized after it.

use async_trait::async_trait;

use crate::domain::foundation::LanguageCode;

/// Incoming text after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingText {
    /// Text in the working language.
    pub text: String,
    /// Language the text was written in.
    pub language: LanguageCode,
}

/// Errors from a translation collaborator
#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("Translation service unavailable: {0}")]
    Unavailable(String),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Invalid response from translation service: {0}")]
    InvalidResponse(String),

    #[error("Translation timed out")]
    Timeout,
}

#[async_trait]
pub trait Translator: Send + Sync {
    /// Translates `text` into English.
    ///
    /// `source` is the caller's guess; `None` asks the translator to detect it.
    async fn to_working(
        &self,
        text: &str,
        source: Option<&LanguageCode>,
    ) -> Result<WorkingText, TranslationError>;

    /// Translates English `text` into `target`.
    async fn from_working(
        &self,
        text: &str,
        target: &LanguageCode,
    ) -> Result<String, TranslationError>;
}
