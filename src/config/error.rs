//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid host address: {0}")]
    InvalidHost(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Storage path must not be empty: {0}")]
    EmptyPath(&'static str),

    #[error("Question bounds must satisfy 1 <= min ({min}) <= max ({max})")]
    InvalidQuestionBounds { min: usize, max: usize },

    #[error("Invalid translation endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Invalid language code: {0}")]
    InvalidLanguage(String),
}
