//! Entry point for the fluent hashing API

use super::hash_builder::HashBuilder;
use crate::{HashAlgorithm, HashValue};

/// Entry point for hash operations
pub struct Hash;

impl Hash {
    /// Use an algorithm chosen at runtime
    #[must_use]
    pub fn algorithm(algorithm: HashAlgorithm) -> HashBuilder {
        HashBuilder::new(algorithm)
    }

    /// Use RSHash
    #[must_use]
    pub fn rs() -> HashBuilder {
        HashBuilder::new(HashAlgorithm::Rs)
    }

    /// Use JSHash
    #[must_use]
    pub fn js() -> HashBuilder {
        HashBuilder::new(HashAlgorithm::Js)
    }

    /// Use PJWHash
    #[must_use]
    pub fn pjw() -> HashBuilder {
        HashBuilder::new(HashAlgorithm::Pjw)
    }

    /// Use ELFHash
    #[must_use]
    pub fn elf() -> HashBuilder {
        HashBuilder::new(HashAlgorithm::Elf)
    }

    /// Use BKDRHash
    #[must_use]
    pub fn bkdr() -> HashBuilder {
        HashBuilder::new(HashAlgorithm::Bkdr)
    }

    /// Use SDBHash
    #[must_use]
    pub fn sdbm() -> HashBuilder {
        HashBuilder::new(HashAlgorithm::Sdbm)
    }

    /// Use DJBHash
    #[must_use]
    pub fn djb() -> HashBuilder {
        HashBuilder::new(HashAlgorithm::Djb)
    }

    /// Use DEKHash
    #[must_use]
    pub fn dek() -> HashBuilder {
        HashBuilder::new(HashAlgorithm::Dek)
    }

    /// Use BPHash
    #[must_use]
    pub fn bp() -> HashBuilder {
        HashBuilder::new(HashAlgorithm::Bp)
    }

    /// Use FNVHash
    #[must_use]
    pub fn fnv() -> HashBuilder {
        HashBuilder::new(HashAlgorithm::Fnv)
    }

    /// Use APHash
    #[must_use]
    pub fn ap() -> HashBuilder {
        HashBuilder::new(HashAlgorithm::Ap)
    }

    /// Hash `data` with every algorithm, in [`HashAlgorithm::ALL`] order
    #[must_use]
    pub fn all<D: AsRef<[u8]>>(data: D) -> Vec<HashValue> {
        let data = data.as_ref();
        HashAlgorithm::ALL
            .iter()
            .map(|&algorithm| HashBuilder::new(algorithm).compute(data))
            .collect()
    }
}
