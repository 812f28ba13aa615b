//! Sentiment buckets derived from a polarity score.

use serde::{Deserialize, Serialize};

/// Polarity above this is positive.
pub const POSITIVE_THRESHOLD: f32 = 0.2;

/// Polarity below this is negative.
pub const NEGATIVE_THRESHOLD: f32 = -0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl Sentiment {
    /// Buckets a polarity in `[-1, 1]`. Non-finite input is neutral.
    pub fn from_polarity(polarity: f32) -> Self {
        if !polarity.is_finite() {
            Self::Neutral
        } else if polarity > POSITIVE_THRESHOLD {
            Self::Positive
        } else if polarity < NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}
