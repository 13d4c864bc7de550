//! Error handling for the hashing crate
//!
//! Hashing itself is infallible; errors only arise when resolving an
//! algorithm from user-supplied input.

use thiserror::Error;

/// Hashing-specific errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    /// The given name does not match any supported algorithm
    #[error("Unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

impl HashError {
    /// Create an `UnsupportedAlgorithm` error
    #[must_use]
    pub fn unsupported_algorithm(name: impl Into<String>) -> Self {
        Self::UnsupportedAlgorithm(name.into())
    }
}

/// Result type for hashing operations
pub type Result<T> = std::result::Result<T, HashError>;
