//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic domain failures. The size catalog is a
/// closed set, so the only thing that can go wrong in this domain is naming a
/// size outside it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A size identifier outside the closed catalog.
    #[error("unknown pizza size: {0}")]
    InvalidSize(String),
}

impl DomainError {
    pub fn invalid_size(name: impl Into<String>) -> Self {
        Self::InvalidSize(name.into())
    }
}
