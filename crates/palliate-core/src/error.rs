use thiserror::Error;

/// Top-level error type for Palliate.
///
/// Subsystem crates define their own error types and implement
/// `From<SubsystemError> for PalliateError`, so `?` works across crate
/// boundaries. Every variant here is a configuration-time failure: once the
/// rule table and corpus are built, matching and search cannot fail.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PalliateError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Rule table error: {0}")]
    Rules(String),

    #[error("Corpus error: {0}")]
    Corpus(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for PalliateError {
    fn from(err: toml::de::Error) -> Self {
        PalliateError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for PalliateError {
    fn from(err: toml::ser::Error) -> Self {
        PalliateError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for PalliateError {
    fn from(err: serde_json::Error) -> Self {
        PalliateError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Palliate operations.
pub type Result<T> = std::result::Result<T, PalliateError>;
