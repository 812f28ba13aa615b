//! Translation Adapters
//!
//! Implementations of the Translator port.
//!
//! - **PassthroughTranslator** - English only, no network
//! - **LibreTranslateTranslator** - LibreTranslate HTTP API
//! - **MockTranslator** - Dictionary-backed, for tests

mod libre_translate;
mod mock_translator;
mod passthrough;

pub use libre_translate::{LibreTranslateConfig, LibreTranslateTranslator};
pub use mock_translator::MockTranslator;
pub use passthrough::PassthroughTranslator;
