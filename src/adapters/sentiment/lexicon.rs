//! Lexicon-based sentiment analyzer.
//!
//! Scores each known word, flips the sign of a word that follows a negation
//! and boosts a word that follows an intensifier. The polarity is the mean of
//! the scored words, clamped to `[-1, 1]`. Text with no known words is 0.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

use crate::ports::{SentimentAnalyzer, SentimentError};

const WORD_SCORES: &[(&str, f32)] = &[
    ("good", 0.7),
    ("great", 0.8),
    ("excellent", 1.0),
    ("awesome", 1.0),
    ("amazing", 0.6),
    ("love", 0.5),
    ("like", 0.3),
    ("enjoy", 0.5),
    ("enjoyed", 0.5),
    ("happy", 0.8),
    ("glad", 0.5),
    ("excited", 0.6),
    ("interesting", 0.5),
    ("fun", 0.3),
    ("easy", 0.4),
    ("nice", 0.6),
    ("cool", 0.35),
    ("confident", 0.5),
    ("ready", 0.2),
    ("thanks", 0.2),
    ("perfect", 1.0),
    ("bad", -0.7),
    ("terrible", -1.0),
    ("awful", -1.0),
    ("horrible", -1.0),
    ("hate", -0.8),
    ("hard", -0.3),
    ("difficult", -0.5),
    ("confusing", -0.5),
    ("confused", -0.4),
    ("stuck", -0.5),
    ("nervous", -0.4),
    ("worried", -0.5),
    ("anxious", -0.4),
    ("unsure", -0.4),
    ("boring", -1.0),
    ("sad", -0.5),
    ("tired", -0.4),
    ("stressed", -0.5),
    ("impossible", -0.7),
    ("wrong", -0.5),
    ("worst", -1.0),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "don't", "dont", "isn't", "isnt", "can't", "cant", "won't", "wont",
    "didn't", "didnt", "doesn't", "doesnt", "wasn't", "wasnt",
];

const INTENSIFIERS: &[(&str, f32)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("so", 1.2),
    ("extremely", 1.5),
    ("super", 1.3),
];

static DEFAULT_LEXICON: Lazy<HashMap<String, f32>> = Lazy::new(|| {
    WORD_SCORES
        .iter()
        .map(|(word, score)| (word.to_string(), *score))
        .collect()
});

/// Word-lexicon polarity scorer with negation handling
#[derive(Debug, Clone)]
pub struct LexiconSentimentAnalyzer {
    lexicon: HashMap<String, f32>,
    negations: HashSet<&'static str>,
    intensifiers: HashMap<&'static str, f32>,
}

impl Default for LexiconSentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconSentimentAnalyzer {
    pub fn new() -> Self {
        Self {
            lexicon: DEFAULT_LEXICON.clone(),
            negations: NEGATIONS.iter().copied().collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
        }
    }

    /// Adds or overrides a word score; scores are clamped to `[-1, 1]`
    pub fn with_word(mut self, word: &str, score: f32) -> Self {
        self.lexicon
            .insert(word.to_lowercase(), score.clamp(-1.0, 1.0));
        self
    }

    /// Synchronous scoring, shared by the port implementation
    pub fn score(&self, text: &str) -> f32 {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = lowered
            .split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .filter(|token| !token.is_empty())
            .collect();

        let mut total = 0.0_f32;
        let mut scored = 0_u32;
        let mut negate = false;
        let mut boost = 1.0_f32;

        for token in tokens {
            if self.negations.contains(token) {
                negate = true;
                continue;
            }
            if let Some(factor) = self.intensifiers.get(token) {
                boost *= factor;
                continue;
            }
            if let Some(score) = self.lexicon.get(token) {
                let mut value = (score * boost).clamp(-1.0, 1.0);
                if negate {
                    // Negation flips and halves the score
                    value *= -0.5;
                }
                total += value;
                scored += 1;
            }
            negate = false;
            boost = 1.0;
        }

        if scored == 0 {
            return 0.0;
        }
        (total / scored as f32).clamp(-1.0, 1.0)
    }
}

#[async_trait]
impl SentimentAnalyzer for LexiconSentimentAnalyzer {
    async fn polarity(&self, text: &str) -> Result<f32, SentimentError> {
        let polarity = self.score(text);
        if polarity.is_finite() {
            Ok(polarity)
        } else {
            Err(SentimentError::Failed(format!(
                "non-finite polarity for {} chars",
                text.len()
            )))
        }
    }
}
