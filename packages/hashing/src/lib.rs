//! General-purpose string hash functions
//!
//! Bit-exact implementations of eleven classic non-cryptographic hashes (RS,
//! JS, PJW, ELF, BKDR, SDBM, DJB, DEK, BP, FNV and AP). Each maps a byte slice
//! to a [`Word`] using wrapping arithmetic and is pure, total and reentrant.
//!
//! None of these functions are suitable where collision or preimage
//! resistance matters.
//!
//! ```
//! use strhash_hashing::{djb_hash, Hash};
//!
//! assert_eq!(djb_hash(b""), 5381);
//! assert_eq!(Hash::djb().compute("abc").value(), 193_485_963);
//! ```

#![forbid(unsafe_code)]

pub mod algorithm;
pub mod algorithms;
pub mod api;
pub mod error;
pub mod hash_value;
pub mod word;

// Re-export error types
pub use error::{HashError, Result};

pub use algorithm::HashAlgorithm;
pub use algorithms::{
    ap_hash, bkdr_hash, bp_hash, dek_hash, djb_hash, elf_hash, fnv_hash, js_hash, pjw_hash,
    rs_hash, sdb_hash,
};
pub use api::{Hash, HashBuilder, HashBuilderWithHandler};
pub use hash_value::HashValue;
pub use word::{HashFn, WORD_BITS, Word};
