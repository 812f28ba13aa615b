//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RecordStore` - Append-only storage of candidate records
//! - `SessionStore` - Persistence of in-flight dialogue sessions
//! - `Translator` - Conversion to and from the working language
//! - `SentimentAnalyzer` - Polarity scoring for follow-up replies

mod record_store;
mod sentiment_analyzer;
mod session_store;
mod translator;

pub use record_store::{RecordStore, RecordStoreError, SaveReason, StoredCandidate};
pub use sentiment_analyzer::{SentimentAnalyzer, SentimentError};
pub use session_store::{SessionStore, SessionStoreError};
pub use translator::{TranslationError, Translator, WorkingText};
