//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic validation failures. Every variant is
/// recoverable: the attempted operation is abandoned without partial mutation
/// and control returns to the caller for the next instruction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A single product token failed validation (e.g. malformed code).
    #[error("invalid product: {0}")]
    InvalidProduct(String),

    /// A batch was rejected as a whole (one malformed token invalidates it).
    #[error("invalid batch: {0}")]
    InvalidBatch(String),
}

impl DomainError {
    pub fn invalid_product(msg: impl Into<String>) -> Self {
        Self::InvalidProduct(msg.into())
    }

    pub fn invalid_batch(msg: impl Into<String>) -> Self {
        Self::InvalidBatch(msg.into())
    }
}
