//! Error types for rule table construction.

use palliate_core::error::PalliateError;

/// Configuration errors detected while building a rule table.
///
/// Matching itself never fails; every variant here keeps the assistant
/// from becoming ready.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("rule table is empty")]
    EmptyRuleTable,
    #[error("fallback answer is empty")]
    EmptyFallback,
    #[error("rule {index} has an empty trigger")]
    EmptyTrigger { index: usize },
    #[error("rule {index} has an empty answer")]
    EmptyAnswer { index: usize },
    #[error("rule {index} matches every utterance: {pattern}")]
    CatchAll { index: usize, pattern: String },
    #[error("rule {index} has an invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        index: usize,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl From<RuleError> for PalliateError {
    fn from(err: RuleError) -> Self {
        PalliateError::Rules(err.to_string())
    }
}
