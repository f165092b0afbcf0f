//! Offline question-answering assistant for caregivers.
//!
//! Resolves a free-text utterance against an ordered table of
//! (trigger, answer) rules. The first rule whose trigger matches wins;
//! when none does, a fixed fallback answer points the user elsewhere.

pub mod builtin;
pub mod conversation;
pub mod error;
pub mod matcher;
pub mod rules;

pub use conversation::Conversation;
pub use error::RuleError;
pub use matcher::{Answer, AnswerMatcher};
pub use rules::{FallbackAnswer, FaqEntry, Rule, RuleTable, RuleTableBuilder, Trigger};
