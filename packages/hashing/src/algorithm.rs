//! Algorithm selection and dispatch
//!
//! Maps each supported algorithm to its function so callers can pick one at
//! runtime (from configuration, a command line, etc.).

use crate::algorithms::{
    ap_hash, bkdr_hash, bp_hash, dek_hash, djb_hash, elf_hash, fnv_hash, js_hash, pjw_hash,
    rs_hash, sdb_hash,
};
use crate::word::{HashFn, Word};
use crate::HashError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported hash algorithms
///
/// Serialized by canonical name (`"DJBHash"`); deserialization accepts any
/// spelling understood by [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum HashAlgorithm {
    /// Robert Sedgwick
    Rs,
    /// Justin Sobel
    Js,
    /// Peter J. Weinberger
    Pjw,
    /// UNIX ELF object format
    Elf,
    /// Brian Kernighan and Dennis Ritchie
    Bkdr,
    /// sdbm database library
    Sdbm,
    /// Daniel J. Bernstein
    Djb,
    /// Donald E. Knuth
    Dek,
    /// BP shift/XOR hash
    Bp,
    /// FNV style multiply-then-XOR
    Fnv,
    /// Arash Partow
    Ap,
}

impl HashAlgorithm {
    /// All algorithms, in their customary published order
    pub const ALL: [HashAlgorithm; 11] = [
        Self::Rs,
        Self::Js,
        Self::Pjw,
        Self::Elf,
        Self::Bkdr,
        Self::Sdbm,
        Self::Djb,
        Self::Dek,
        Self::Bp,
        Self::Fnv,
        Self::Ap,
    ];

    /// Function implementing this algorithm
    #[must_use]
    pub const fn function(self) -> HashFn {
        match self {
            Self::Rs => rs_hash,
            Self::Js => js_hash,
            Self::Pjw => pjw_hash,
            Self::Elf => elf_hash,
            Self::Bkdr => bkdr_hash,
            Self::Sdbm => sdb_hash,
            Self::Djb => djb_hash,
            Self::Dek => dek_hash,
            Self::Bp => bp_hash,
            Self::Fnv => fnv_hash,
            Self::Ap => ap_hash,
        }
    }

    /// Hash `data` with this algorithm
    #[must_use]
    #[inline]
    pub fn hash(self, data: &[u8]) -> Word {
        (self.function())(data)
    }

    /// Canonical name, e.g. `"BKDRHash"`
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rs => "RSHash",
            Self::Js => "JSHash",
            Self::Pjw => "PJWHash",
            Self::Elf => "ELFHash",
            Self::Bkdr => "BKDRHash",
            Self::Sdbm => "SDBHash",
            Self::Djb => "DJBHash",
            Self::Dek => "DEKHash",
            Self::Bp => "BPHash",
            Self::Fnv => "FNVHash",
            Self::Ap => "APHash",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = HashError;

    /// Case-insensitive; accepts `"DJBHash"`, `"djb"`, `"DJB-Hash"` and the
    /// like. `"sdbm"` and `"sdb"` both select [`HashAlgorithm::Sdbm`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let short = normalized.strip_suffix("hash").unwrap_or(&normalized);

        let algorithm = match short {
            "rs" => Self::Rs,
            "js" => Self::Js,
            "pjw" => Self::Pjw,
            "elf" => Self::Elf,
            "bkdr" => Self::Bkdr,
            "sdb" | "sdbm" => Self::Sdbm,
            "djb" => Self::Djb,
            "dek" => Self::Dek,
            "bp" => Self::Bp,
            "fnv" => Self::Fnv,
            "ap" => Self::Ap,
            _ => {
                tracing::debug!(input = s, "rejected unknown hash algorithm name");
                return Err(HashError::unsupported_algorithm(s));
            }
        };
        Ok(algorithm)
    }
}

impl TryFrom<String> for HashAlgorithm {
    type Error = HashError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HashAlgorithm> for &'static str {
    fn from(algorithm: HashAlgorithm) -> Self {
        algorithm.name()
    }
}
