use thiserror::Error;

/// Classifies corpus loading errors for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusErrorKind {
    /// Corpus path not configured (empty)
    NotConfigured,
    /// File open/read failure
    FileError,
    /// Data format or decoding error (not UTF-8, truncated stream, etc.)
    InvalidData,
}

/// Resolver error types
#[derive(Error, Debug)]
pub enum PslError {
    #[error("Corpus unavailable: {message}")]
    CorpusUnavailable {
        kind: CorpusErrorKind,
        message: String,
    },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl PslError {
    pub(crate) fn corpus(kind: CorpusErrorKind, message: impl Into<String>) -> Self {
        PslError::CorpusUnavailable {
            kind,
            message: message.into(),
        }
    }

    /// Corpus error kind, if this is a corpus error.
    pub fn corpus_kind(&self) -> Option<CorpusErrorKind> {
        match self {
            PslError::CorpusUnavailable { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PslError>;
