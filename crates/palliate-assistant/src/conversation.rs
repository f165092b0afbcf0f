//! Conversation transcript kept by the host around the matcher.
//!
//! The matcher is stateless; a [`Conversation`] owns the append-only list
//! of turns for one session and decides when the matcher is called at all.

use chrono::Local;
use palliate_core::types::{Role, Turn};
use tracing::debug;
use uuid::Uuid;

use crate::matcher::AnswerMatcher;

/// One user session with the assistant.
#[derive(Debug, Clone)]
pub struct Conversation {
    id: Uuid,
    started_at: i64,
    greeting: String,
    turns: Vec<Turn>,
}

impl Conversation {
    /// Start a session seeded with one assistant turn carrying `greeting`.
    pub fn new(greeting: impl Into<String>) -> Self {
        let greeting = greeting.into();
        let now = Local::now().timestamp();
        Self {
            id: Uuid::new_v4(),
            started_at: now,
            turns: vec![Turn::assistant(greeting.clone(), None, now)],
            greeting,
        }
    }

    /// Submit one utterance.
    ///
    /// Input is trimmed. Blank input does not reach the matcher, appends
    /// nothing and returns `None`. Otherwise the user turn and the answer
    /// turn are appended, in that order, and the answer turn is returned.
    pub fn submit(&mut self, matcher: &AnswerMatcher, input: &str) -> Option<&Turn> {
        let utterance = input.trim();
        if utterance.is_empty() {
            return None;
        }

        let answer = matcher.resolve(utterance);
        let now = Local::now().timestamp();
        self.turns.push(Turn::user(utterance, now));
        self.turns
            .push(Turn::assistant(answer.text(), answer.link().cloned(), now));
        debug!(
            session = %self.id,
            turns = self.turns.len(),
            fallback = answer.is_fallback(),
            "Turn appended"
        );
        self.turns.last()
    }

    /// Drop the transcript and start over with a fresh session id.
    pub fn reset(&mut self) {
        *self = Self::new(std::mem::take(&mut self.greeting));
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> i64 {
        self.started_at
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of user utterances answered so far.
    pub fn exchanges(&self) -> usize {
        self.turns.iter().filter(|t| t.role == Role::User).count()
    }
}
