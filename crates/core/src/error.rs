//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every failure a route can produce is one of these variants; the HTTP
/// layer maps them to a `{"message": ...}` envelope with a 400-class
/// status (401 for `Auth`). The message is the only detail exposed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required input field was missing or malformed.
    #[error("{0}")]
    Validation(String),

    /// A uniqueness conflict (e.g. username or email already taken).
    #[error("{0}")]
    Conflict(String),

    /// Bad credentials or an invalid/missing token.
    #[error("{0}")]
    Auth(String),

    /// A requested user or book does not exist (within the caller's scope).
    #[error("{0}")]
    NotFound(String),

    /// A store operation failed or was not acknowledged.
    #[error("{0}")]
    Persistence(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Auth(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }
}
