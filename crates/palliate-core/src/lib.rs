//! Shared foundation for the Palliate caregiver assistant.
//!
//! Holds configuration, the top-level error type, the text normalization
//! used on both sides of every comparison, and the types shared by the
//! assistant and knowledge crates.

pub mod config;
pub mod error;
pub mod normalize;
pub mod types;

pub use config::PalliateConfig;
pub use error::{PalliateError, Result};
pub use normalize::normalize;
pub use types::*;
