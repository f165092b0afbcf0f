//! Error types for corpus construction.

use palliate_core::error::PalliateError;

/// Errors detected while building a document index.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("duplicate document id: {0}")]
    DuplicateId(u32),
}

impl From<CorpusError> for PalliateError {
    fn from(err: CorpusError) -> Self {
        PalliateError::Corpus(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_error_display() {
        assert_eq!(CorpusError::DuplicateId(3).to_string(), "duplicate document id: 3");
    }

    #[test]
    fn test_corpus_error_into_palliate_error() {
        let err: PalliateError = CorpusError::DuplicateId(42).into();
        assert!(matches!(err, PalliateError::Corpus(_)));
        assert_eq!(err.to_string(), "Corpus error: duplicate document id: 42");
    }
}
