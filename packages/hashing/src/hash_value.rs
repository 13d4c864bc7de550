//! Hash value type with encoding support

use crate::algorithm::HashAlgorithm;
use crate::word::Word;
use std::fmt;

/// Result of a hash computation through the fluent API
///
/// Pairs the computed word with the algorithm that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HashValue {
    algorithm: HashAlgorithm,
    value: Word,
}

impl HashValue {
    /// Create a new hash value
    #[must_use]
    pub fn new(algorithm: HashAlgorithm, value: Word) -> Self {
        Self { algorithm, value }
    }

    /// The raw hash word
    #[must_use]
    pub fn value(&self) -> Word {
        self.value
    }

    /// Algorithm that produced this value
    #[must_use]
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Big-endian bytes of the hash word
    #[must_use]
    pub fn to_be_bytes(&self) -> [u8; std::mem::size_of::<Word>()] {
        self.value.to_be_bytes()
    }

    /// Zero-padded lowercase hex of the full word
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_be_bytes())
    }
}

impl From<HashValue> for Word {
    fn from(hash: HashValue) -> Self {
        hash.value
    }
}

impl fmt::Display for HashValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.algorithm, self.value)
    }
}
