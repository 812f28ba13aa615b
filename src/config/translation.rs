//! Translation configuration

use secrecy::Secret;
use serde::Deserialize;
use std::time::Duration;

use crate::domain::foundation::LanguageCode;

use super::error::ValidationError;

/// Translation provider settings
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationConfig {
    #[serde(default)]
    pub provider: TranslationProvider,

    /// Base URL of the LibreTranslate instance
    pub endpoint: Option<String>,

    /// Optional LibreTranslate API key
    pub api_key: Option<Secret<String>>,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Language the dialogue core works in
    #[serde(default = "default_working_language")]
    pub working_language: String,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TranslationProvider {
    #[default]
    Passthrough,
    LibreTranslate,
}

impl TranslationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let working = LanguageCode::new(&self.working_language)
            .map_err(|_| ValidationError::InvalidLanguage(self.working_language.clone()))?;
        if !working.is_english() {
            // Prompts and validators are English-only
            return Err(ValidationError::InvalidLanguage(self.working_language.clone()));
        }

        if self.provider == TranslationProvider::LibreTranslate {
            let endpoint = self
                .endpoint
                .as_deref()
                .filter(|e| !e.trim().is_empty())
                .ok_or(ValidationError::MissingRequired("TRANSLATION__ENDPOINT"))?;
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(ValidationError::InvalidEndpoint(endpoint.to_string()));
            }
        }
        Ok(())
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            provider: TranslationProvider::default(),
            endpoint: None,
            api_key: None,
            timeout_secs: default_timeout(),
            working_language: default_working_language(),
        }
    }
}

fn default_timeout() -> u64 {
    10
}

fn default_working_language() -> String {
    "en".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = TranslationConfig::default();
        assert_eq!(config.provider, TranslationProvider::Passthrough);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_libretranslate_requires_endpoint() {
        let config = TranslationConfig {
            provider: TranslationProvider::LibreTranslate,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("TRANSLATION__ENDPOINT"))
        );
    }

    #[test]
    fn test_endpoint_must_be_http() {
        let config = TranslationConfig {
            provider: TranslationProvider::LibreTranslate,
            endpoint: Some("ftp://lt".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn test_non_english_working_language_rejected() {
        let config = TranslationConfig {
            working_language: "fr".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_provider_deserializes() {
        let config: TranslationConfig = serde_json::from_str(
            r#"{"provider": "libretranslate", "endpoint": "http://localhost:5000", "api_key": "k"}"#,
        )
        .unwrap();
        assert_eq!(config.provider, TranslationProvider::LibreTranslate);
        assert!(config.api_key.is_some());
        assert!(config.validate().is_ok());
    }
}
