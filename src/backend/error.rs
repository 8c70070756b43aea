use thiserror::Error;

/// Failure of a whole query submission, as reported by the engine or the
/// transport underneath it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SearchError {
    pub message: String,
}

impl SearchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Failure to hydrate a single content hash. Carries the offending hash
/// so the caller can mark exactly one result tile as broken.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{file_hash}: {message}")]
pub struct FetchError {
    pub file_hash: String,
    pub message: String,
}

impl FetchError {
    pub fn new(file_hash: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            file_hash: file_hash.into(),
            message: message.into(),
        }
    }
}
