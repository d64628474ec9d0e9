//! Domain-level error types.
//!
//! A missing entity is not an error at this layer: lookups return `Option`.

use thiserror::Error;

/// Failures of the post, comment and like services.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Rejected input, such as a blank user name.
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error(transparent)]
    Storage(#[from] RepoError),
}

/// Failures reported by a store.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Store unreachable: {0}")]
    Connection(String),

    #[error("Store query failed: {0}")]
    Query(String),

    /// A row expected to exist vanished under a write.
    #[error("Row not found")]
    NotFound,

    /// Foreign key or uniqueness violation, e.g. a second like by the same user.
    #[error("Constraint violated: {0}")]
    Constraint(String),
}

/// Result type alias for service operations.
pub type DomainResult<T> = Result<T, DomainError>;
