//! Passthrough translator for English-only deployments.

use async_trait::async_trait;

use crate::domain::foundation::LanguageCode;
use crate::ports::{TranslationError, Translator, WorkingText};

/// Treats every message as English and never rewrites replies.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughTranslator;

impl PassthroughTranslator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Translator for PassthroughTranslator {
    async fn to_working(
        &self,
        text: &str,
        _source: Option<&LanguageCode>,
    ) -> Result<WorkingText, TranslationError> {
        Ok(WorkingText {
            text: text.to_string(),
            language: LanguageCode::english(),
        })
    }

    async fn from_working(
        &self,
        text: &str,
        _target: &LanguageCode,
    ) -> Result<String, TranslationError> {
        Ok(text.to_string())
    }
}
