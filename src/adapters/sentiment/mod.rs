//! Sentiment Adapters
//!
//! - **LexiconSentimentAnalyzer** - Word lexicon with negation and intensifiers

mod lexicon;

pub use lexicon::LexiconSentimentAnalyzer;
