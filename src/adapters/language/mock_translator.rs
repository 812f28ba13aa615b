//! Mock translator for testing.
//!
//! Looks translations up in fixed dictionaries and can be told to fail in
//! either direction.
//!
//! ```ignore
//! let translator = MockTranslator::new()
//!     .detecting("es")
//!     .with_incoming("hola", "hi")
//!     .with_outgoing("es", TYPE_HI, "Escribe 'hola' para empezar.");
//! ```

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::foundation::LanguageCode;
use crate::ports::{TranslationError, Translator, WorkingText};

#[derive(Debug, Clone, Default)]
pub struct MockTranslator {
    detected: Option<LanguageCode>,
    incoming: HashMap<String, String>,
    outgoing: HashMap<(String, String), String>,
    fail_incoming: bool,
    fail_outgoing: bool,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Language reported for every incoming message when no source is given.
    pub fn detecting(mut self, language: &str) -> Self {
        self.detected = LanguageCode::new(language).ok();
        self
    }

    pub fn with_incoming(mut self, original: &str, english: &str) -> Self {
        self.incoming.insert(original.to_string(), english.to_string());
        self
    }

    pub fn with_outgoing(mut self, language: &str, english: &str, localized: &str) -> Self {
        self.outgoing.insert(
            (language.to_string(), english.to_string()),
            localized.to_string(),
        );
        self
    }

    pub fn failing_incoming(mut self) -> Self {
        self.fail_incoming = true;
        self
    }

    pub fn failing_outgoing(mut self) -> Self {
        self.fail_outgoing = true;
        self
    }

    /// Recorded calls as `in:<text>` / `out:<lang>:<text>`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn to_working(
        &self,
        text: &str,
        source: Option<&LanguageCode>,
    ) -> Result<WorkingText, TranslationError> {
        self.record(format!("in:{}", text));
        if self.fail_incoming {
            return Err(TranslationError::Unavailable("mock failure".to_string()));
        }

        let language = source
            .cloned()
            .or_else(|| self.detected.clone())
            .unwrap_or_default();
        let text = self
            .incoming
            .get(text)
            .cloned()
            .unwrap_or_else(|| text.to_string());
        Ok(WorkingText { text, language })
    }

    async fn from_working(
        &self,
        text: &str,
        target: &LanguageCode,
    ) -> Result<String, TranslationError> {
        self.record(format!("out:{}:{}", target, text));
        if self.fail_outgoing {
            return Err(TranslationError::Unavailable("mock failure".to_string()));
        }

        Ok(self
            .outgoing
            .get(&(target.as_str().to_string(), text.to_string()))
            .cloned()
            .unwrap_or_else(|| text.to_string()))
    }
}
