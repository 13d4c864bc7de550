//! Hash builder - one builder type shared by every algorithm
//!
//! Usage: `Hash::djb().on_result(|hash| hash.value() % 1024).compute(data)`

use crate::{HashAlgorithm, HashValue};

/// Hash builder for a selected algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashBuilder {
    algorithm: HashAlgorithm,
}

/// Hash builder with result handler
#[derive(Debug)]
pub struct HashBuilderWithHandler<F> {
    algorithm: HashAlgorithm,
    result_handler: F,
}

impl HashBuilder {
    /// Create a builder for `algorithm`
    #[must_use]
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self { algorithm }
    }

    /// Algorithm this builder computes
    #[must_use]
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Add `on_result` handler
    #[must_use]
    pub fn on_result<F, T>(self, handler: F) -> HashBuilderWithHandler<F>
    where
        F: FnOnce(HashValue) -> T,
    {
        HashBuilderWithHandler {
            algorithm: self.algorithm,
            result_handler: handler,
        }
    }

    /// Compute hash - action takes data as argument
    #[must_use]
    pub fn compute<D: AsRef<[u8]>>(self, data: D) -> HashValue {
        compute(self.algorithm, data.as_ref())
    }
}

impl<F> HashBuilderWithHandler<F> {
    /// Compute hash and hand the value to the result handler
    pub fn compute<D, T>(self, data: D) -> T
    where
        D: AsRef<[u8]>,
        F: FnOnce(HashValue) -> T,
    {
        let hash = compute(self.algorithm, data.as_ref());
        (self.result_handler)(hash)
    }
}

fn compute(algorithm: HashAlgorithm, data: &[u8]) -> HashValue {
    let value = algorithm.hash(data);
    tracing::trace!(%algorithm, len = data.len(), value, "computed hash");
    HashValue::new(algorithm, value)
}
