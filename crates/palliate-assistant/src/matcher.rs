//! First-match-wins answer selection.

use std::fmt;

use palliate_core::config::AssistantConfig;
use palliate_core::normalize;
use palliate_core::types::Link;
use tracing::debug;

use crate::builtin;
use crate::error::RuleError;
use crate::rules::{FallbackAnswer, Rule, RuleTable};

// =============================================================================
// Answer
// =============================================================================

/// The outcome of resolving one utterance.
#[derive(Debug, Clone, Copy)]
pub enum Answer<'a> {
    /// The first matching rule, with its position in the table.
    Rule { index: usize, rule: &'a Rule },
    /// No rule matched.
    Fallback(&'a FallbackAnswer),
}

impl<'a> Answer<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Answer::Rule { rule, .. } => rule.answer(),
            Answer::Fallback(fallback) => fallback.text(),
        }
    }

    /// External reference the UI should render as a hyperlink.
    pub fn link(&self) -> Option<&'a Link> {
        match self {
            Answer::Rule { .. } => None,
            Answer::Fallback(fallback) => fallback.link(),
        }
    }

    pub fn rule_index(&self) -> Option<usize> {
        match self {
            Answer::Rule { index, .. } => Some(*index),
            Answer::Fallback(_) => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Answer::Fallback(_))
    }
}

/// Plain-text rendering: the answer, then the link (if any) on its own line.
impl fmt::Display for Answer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())?;
        if let Some(link) = self.link() {
            write!(f, "\n{}: {}", link.label, link.url)?;
        }
        Ok(())
    }
}

// =============================================================================
// AnswerMatcher
// =============================================================================

/// Maps an utterance to exactly one answer.
///
/// Holds only immutable data, so one matcher can serve any number of
/// callers at once.
#[derive(Debug, Clone)]
pub struct AnswerMatcher {
    table: RuleTable,
    fallback: FallbackAnswer,
}

impl AnswerMatcher {
    pub fn new(table: RuleTable, fallback: FallbackAnswer) -> Self {
        Self { table, fallback }
    }

    /// Build from `[assistant]` config. Without configured FAQ entries or
    /// rules the built-in care-topic table is used.
    pub fn from_config(config: &AssistantConfig) -> Result<Self, RuleError> {
        let table = if config.has_custom_rules() {
            RuleTable::from_config(&config.faq, &config.rules)?
        } else {
            builtin::rule_table()?
        };
        let fallback = FallbackAnswer::from_config(&config.fallback)?;
        Ok(Self::new(table, fallback))
    }

    /// Resolve `utterance` against the table in priority order.
    ///
    /// Callers are expected to trim and skip blank input; this method never
    /// fails and never returns an empty answer.
    pub fn resolve(&self, utterance: &str) -> Answer<'_> {
        let normalized = normalize(utterance);
        match self.table.first_match(&normalized) {
            Some((index, rule)) => {
                debug!(rule = index, trigger = rule.trigger().as_str(), "Rule matched");
                Answer::Rule { index, rule }
            }
            None => {
                debug!("No rule matched, using fallback");
                Answer::Fallback(&self.fallback)
            }
        }
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    pub fn fallback(&self) -> &FallbackAnswer {
        &self.fallback
    }
}
