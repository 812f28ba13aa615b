//! LibreTranslate adapter - Translation over a LibreTranslate HTTP API.
//!
//! Uses `POST /detect` when the source language is unknown and
//! `POST /translate` for both directions. English text is never sent out.
//!
//! ```ignore
//! let config = LibreTranslateConfig::new("http://localhost:5000")
//!     .with_api_key("secret")
//!     .with_timeout(Duration::from_secs(5));
//! let translator = LibreTranslateTranslator::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::foundation::LanguageCode;
use crate::ports::{TranslationError, Translator, WorkingText};

/// Connection settings for a LibreTranslate instance.
#[derive(Debug, Clone)]
pub struct LibreTranslateConfig {
    /// Base URL, without a trailing slash.
    pub endpoint: String,
    api_key: Option<Secret<String>>,
    pub timeout: Duration,
}

impl LibreTranslateConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            api_key: None,
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(Secret::new(api_key.into()));
        self
    }

    pub fn with_secret_api_key(mut self, api_key: Option<Secret<String>>) -> Self {
        self.api_key = api_key;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_ref().map(|key| key.expose_secret().as_str())
    }
}

#[derive(Debug, Serialize)]
struct DetectRequest<'a> {
    q: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct Detection {
    language: String,
    #[serde(default)]
    confidence: f64,
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// Translator backed by a LibreTranslate server.
pub struct LibreTranslateTranslator {
    config: LibreTranslateConfig,
    client: Client,
}

impl LibreTranslateTranslator {
    pub fn new(config: LibreTranslateConfig) -> Result<Self, TranslationError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TranslationError::Unavailable(format!("HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.endpoint, path)
    }

    fn map_send_error(e: reqwest::Error) -> TranslationError {
        if e.is_timeout() {
            TranslationError::Timeout
        } else {
            TranslationError::Unavailable(e.to_string())
        }
    }

    async fn check_status(response: Response) -> Result<Response, TranslationError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        match status.as_u16() {
            400 => Err(TranslationError::UnsupportedLanguage(body)),
            _ => Err(TranslationError::Unavailable(format!(
                "Status {}: {}",
                status, body
            ))),
        }
    }

    async fn detect(&self, text: &str) -> Result<LanguageCode, TranslationError> {
        let response = self
            .client
            .post(self.url("detect"))
            .json(&DetectRequest {
                q: text,
                api_key: self.config.api_key(),
            })
            .send()
            .await
            .map_err(Self::map_send_error)?;

        let detections: Vec<Detection> = Self::check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| TranslationError::InvalidResponse(e.to_string()))?;

        let best = detections
            .into_iter()
            .max_by(|a, b| a.confidence.total_cmp(&b.confidence))
            .ok_or_else(|| TranslationError::InvalidResponse("no detections".to_string()))?;

        LanguageCode::new(&best.language)
            .map_err(|e| TranslationError::InvalidResponse(e.to_string()))
    }

    async fn translate(
        &self,
        text: &str,
        source: &LanguageCode,
        target: &LanguageCode,
    ) -> Result<String, TranslationError> {
        let response = self
            .client
            .post(self.url("translate"))
            .json(&TranslateRequest {
                q: text,
                source: source.as_str(),
                target: target.as_str(),
                format: "text",
                api_key: self.config.api_key(),
            })
            .send()
            .await
            .map_err(Self::map_send_error)?;

        let translated: TranslateResponse = Self::check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| TranslationError::InvalidResponse(e.to_string()))?;

        Ok(translated.translated_text)
    }
}

#[async_trait]
impl Translator for LibreTranslateTranslator {
    async fn to_working(
        &self,
        text: &str,
        source: Option<&LanguageCode>,
    ) -> Result<WorkingText, TranslationError> {
        let language = match source {
            Some(language) => language.clone(),
            None => self.detect(text).await?,
        };

        if language.is_english() {
            return Ok(WorkingText {
                text: text.to_string(),
                language,
            });
        }

        let text = self
            .translate(text, &language, &LanguageCode::english())
            .await?;
        Ok(WorkingText { text, language })
    }

    async fn from_working(
        &self,
        text: &str,
        target: &LanguageCode,
    ) -> Result<String, TranslationError> {
        if target.is_english() {
            return Ok(text.to_string());
        }
        self.translate(text, &LanguageCode::english(), target).await
    }
}
