//! Knowledge-base search for Palliate.
//!
//! Filters a small, fixed document corpus by substring overlap between the
//! query and each document's title or tags. Matches keep corpus order.

pub mod builtin;
pub mod error;
pub mod index;

pub use error::CorpusError;
pub use index::{DocumentIndex, Matches};
