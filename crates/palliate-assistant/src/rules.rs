//! Typed rule records and the ordered table they live in.
//!
//! A [`RuleTable`] is built once through [`RuleTableBuilder`], which
//! normalizes literal triggers, compiles regex triggers and rejects
//! anything that would make the table unsafe to evaluate. After that the
//! table is immutable.

use palliate_core::config::{FallbackConfig, FaqConfig, RuleConfig, TriggerKind};
use palliate_core::normalize;
use palliate_core::types::Link;
use regex::{Regex, RegexBuilder};
use tracing::info;

use crate::error::RuleError;

/// Number of characters of a whitespace-stripped FAQ question used as its
/// prefix key.
pub const FAQ_PREFIX_CHARS: usize = 6;

/// One-character utterances of distinct classes (space, Latin, Thai, digit,
/// emoji). A regex that accepts all of them is treated as a catch-all.
const CATCH_ALL_SAMPLES: &[&str] = &[" ", "a", "ก", "0", "🙏"];

/// Whether an unanchored regex would answer every non-blank utterance.
fn is_catch_all(re: &Regex) -> bool {
    re.is_match("") || CATCH_ALL_SAMPLES.iter().all(|sample| re.is_match(sample))
}

// =============================================================================
// Trigger
// =============================================================================

/// Decides whether a rule answers a normalized utterance.
#[derive(Debug, Clone)]
pub enum Trigger {
    /// Substring test. Holds the already-normalized needle.
    Literal(String),
    /// Case-insensitive, unanchored regular expression.
    Pattern(Regex),
}

impl Trigger {
    /// Evaluate the trigger against an utterance that has already been
    /// passed through [`normalize`].
    pub fn is_match(&self, normalized: &str) -> bool {
        match self {
            Trigger::Literal(needle) => normalized.contains(needle.as_str()),
            Trigger::Pattern(re) => re.is_match(normalized),
        }
    }

    /// The literal needle or regex source.
    pub fn as_str(&self) -> &str {
        match self {
            Trigger::Literal(needle) => needle,
            Trigger::Pattern(re) => re.as_str(),
        }
    }
}

// =============================================================================
// Rule
// =============================================================================

/// A trigger and the canned answer it selects.
#[derive(Debug, Clone)]
pub struct Rule {
    trigger: Trigger,
    answer: String,
}

impl Rule {
    pub fn trigger(&self) -> &Trigger {
        &self.trigger
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn matches(&self, normalized: &str) -> bool {
        self.trigger.is_match(normalized)
    }
}

// =============================================================================
// FAQ entries
// =============================================================================

/// A frequently asked question and its answer.
///
/// An entry does not match on its full question. It expands into literal
/// rules keyed on (1) the first [`FAQ_PREFIX_CHARS`] characters of the
/// question with all whitespace removed and (2) the question's first
/// space-separated word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Literal keys this entry matches on, in evaluation order.
    ///
    /// Empty keys are dropped, and the first-word key is dropped when it
    /// repeats the prefix key.
    pub fn keys(&self) -> Vec<String> {
        let compact: String = self.question.chars().filter(|c| !c.is_whitespace()).collect();
        let prefix: String = compact.chars().take(FAQ_PREFIX_CHARS).collect();
        let first_word = self.question.split(' ').next().unwrap_or_default();

        let mut keys = Vec::with_capacity(2);
        if !prefix.is_empty() {
            keys.push(prefix);
        }
        if !first_word.is_empty() && !keys.iter().any(|k| k == first_word) {
            keys.push(first_word.to_string());
        }
        keys
    }
}

// =============================================================================
// Fallback
// =============================================================================

/// The answer returned when no rule matches.
///
/// Always non-empty: it has to tell the user where a real answer can be
/// found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackAnswer {
    text: String,
    link: Option<Link>,
}

impl FallbackAnswer {
    pub fn new(text: impl Into<String>, link: Option<Link>) -> Result<Self, RuleError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(RuleError::EmptyFallback);
        }
        Ok(Self { text, link })
    }

    pub fn from_config(config: &FallbackConfig) -> Result<Self, RuleError> {
        let link = config
            .link_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .map(|url| Link::new(config.link_label.clone(), url));
        Self::new(config.text.clone(), link)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn link(&self) -> Option<&Link> {
        self.link.as_ref()
    }
}

// =============================================================================
// RuleTable
// =============================================================================

/// An ordered, non-empty, immutable list of rules.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    pub fn builder() -> RuleTableBuilder {
        RuleTableBuilder::default()
    }

    /// Build the table described by `[assistant]` config: FAQ entries first,
    /// then topic rules, each in declared order.
    pub fn from_config(faq: &[FaqConfig], rules: &[RuleConfig]) -> Result<Self, RuleError> {
        let mut builder = Self::builder();
        for entry in faq {
            builder = builder.faq(FaqEntry::new(entry.question.clone(), entry.answer.clone()));
        }
        for rule in rules {
            builder = match rule.kind {
                TriggerKind::Literal => builder.literal(rule.pattern.clone(), rule.answer.clone()),
                TriggerKind::Regex => builder.regex(rule.pattern.clone(), rule.answer.clone()),
            };
        }
        builder.build()
    }

    /// Index and rule of the first rule matching `normalized`.
    pub fn first_match(&self, normalized: &str) -> Option<(usize, &Rule)> {
        self.rules
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.matches(normalized))
    }

    pub fn get(&self, index: usize) -> Option<&Rule> {
        self.rules.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Always `false` for a built table.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[derive(Debug, Clone)]
enum PendingTrigger {
    Literal(String),
    Regex(String),
}

#[derive(Debug, Clone)]
struct PendingRule {
    trigger: PendingTrigger,
    answer: String,
}

/// Collects rules in priority order and validates them on [`build`].
///
/// [`build`]: RuleTableBuilder::build
#[derive(Debug, Clone, Default)]
pub struct RuleTableBuilder {
    pending: Vec<PendingRule>,
}

impl RuleTableBuilder {
    /// Append a substring rule.
    pub fn literal(mut self, pattern: impl Into<String>, answer: impl Into<String>) -> Self {
        self.pending.push(PendingRule {
            trigger: PendingTrigger::Literal(pattern.into()),
            answer: answer.into(),
        });
        self
    }

    /// Append a regular-expression rule.
    pub fn regex(mut self, pattern: impl Into<String>, answer: impl Into<String>) -> Self {
        self.pending.push(PendingRule {
            trigger: PendingTrigger::Regex(pattern.into()),
            answer: answer.into(),
        });
        self
    }

    /// Append one literal rule per key of `entry`.
    pub fn faq(mut self, entry: FaqEntry) -> Self {
        for key in entry.keys() {
            self = self.literal(key, entry.answer.clone());
        }
        self
    }

    pub fn build(self) -> Result<RuleTable, RuleError> {
        if self.pending.is_empty() {
            return Err(RuleError::EmptyRuleTable);
        }

        let mut rules = Vec::with_capacity(self.pending.len());
        let mut regex_count = 0usize;
        for (index, pending) in self.pending.into_iter().enumerate() {
            if pending.answer.trim().is_empty() {
                return Err(RuleError::EmptyAnswer { index });
            }
            let trigger = match pending.trigger {
                PendingTrigger::Literal(pattern) => {
                    if pattern.trim().is_empty() {
                        return Err(RuleError::EmptyTrigger { index });
                    }
                    Trigger::Literal(normalize(&pattern))
                }
                PendingTrigger::Regex(pattern) => {
                    if pattern.is_empty() {
                        return Err(RuleError::EmptyTrigger { index });
                    }
                    let re = RegexBuilder::new(&pattern)
                        .case_insensitive(true)
                        .build()
                        .map_err(|source| RuleError::InvalidPattern {
                            index,
                            pattern: pattern.clone(),
                            source,
                        })?;
                    if is_catch_all(&re) {
                        return Err(RuleError::CatchAll { index, pattern });
                    }
                    regex_count += 1;
                    Trigger::Pattern(re)
                }
            };
            rules.push(Rule {
                trigger,
                answer: pending.answer,
            });
        }

        info!(rules = rules.len(), regex_rules = regex_count, "Rule table built");
        Ok(RuleTable { rules })
    }
}
