//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Allow "more" and new tech stack lists after questions are issued
    #[serde(default)]
    pub allow_stack_resubmission: bool,

    /// Classify sentiment of follow-up messages
    #[serde(default = "default_enable_sentiment")]
    pub enable_sentiment: bool,

    /// Sentiment remarks and the candidate's name on every reply
    #[serde(default = "default_decorate_replies")]
    pub decorate_replies: bool,

    /// Show detailed error messages (disable in production!)
    #[serde(default)]
    pub verbose_errors: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            allow_stack_resubmission: false,
            enable_sentiment: default_enable_sentiment(),
            decorate_replies: default_decorate_replies(),
            verbose_errors: false,
        }
    }
}

fn default_enable_sentiment() -> bool {
    true
}

fn default_decorate_replies() -> bool {
    true
}
