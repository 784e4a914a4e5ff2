use thiserror::Error;

use bookshelf_core::DomainError;

/// Store-level failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// An insert would violate a uniqueness constraint.
    #[error("{0} already exists")]
    Duplicate(&'static str),

    /// The backing store could not complete the operation.
    #[error("store operation failed: {0}")]
    Operation(String),
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate(_) => DomainError::conflict(err.to_string()),
            StoreError::Operation(_) => DomainError::persistence(err.to_string()),
        }
    }
}
