//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `records` - Candidate record stores (JSON file, in-memory)
//! - `storage` - Dialogue session stores (YAML files, in-memory)
//! - `language` - Translators (passthrough, LibreTranslate, mock)
//! - `sentiment` - Sentiment analyzers
//! - `http` - REST transport

pub mod http;
pub mod language;
pub mod records;
pub mod sentiment;
pub mod storage;

pub use language::{LibreTranslateConfig, LibreTranslateTranslator, MockTranslator, PassthroughTranslator};
pub use records::{InMemoryRecordStore, JsonFileRecordStore};
pub use sentiment::LexiconSentimentAnalyzer;
pub use storage::{FileSessionStore, InMemorySessionStore};
