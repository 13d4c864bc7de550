//! Multiplicative rolling hashes
//!
//! RS, BKDR, SDBM, DJB and FNV all scale the accumulator by a constant (or,
//! for RS, a compounding factor) before mixing in the next byte.

use crate::word::Word;

const RS_A: Word = 63689;
const RS_B: Word = 378_551;
const BKDR_SEED: Word = 131;
const DJB_INIT: Word = 5381;
const FNV_PRIME: Word = 0x811C_9DC5;

/// RS hash from Robert Sedgwick's "Algorithms in C"
///
/// The multiplier starts at 63689 and is itself multiplied by 378551 after
/// every byte.
#[must_use]
#[inline]
pub fn rs_hash(data: &[u8]) -> Word {
    let mut a = RS_A;
    let mut hash: Word = 0;
    for &byte in data {
        hash = hash.wrapping_mul(a).wrapping_add(Word::from(byte));
        a = a.wrapping_mul(RS_B);
    }
    hash
}

/// BKDR hash from Kernighan and Ritchie's "The C Programming Language"
///
/// Polynomial hash with seed 131 (the 31, 131, 1313, 13131 family).
#[must_use]
#[inline]
pub fn bkdr_hash(data: &[u8]) -> Word {
    data.iter().fold(0, |hash: Word, &byte| {
        hash.wrapping_mul(BKDR_SEED).wrapping_add(Word::from(byte))
    })
}

/// SDBM hash, as used by the sdbm database library
///
/// Equivalent to `hash * 65599 + byte` modulo the word size.
#[must_use]
#[inline]
pub fn sdb_hash(data: &[u8]) -> Word {
    data.iter().fold(0, |hash: Word, &byte| {
        Word::from(byte)
            .wrapping_add(hash << 6)
            .wrapping_add(hash << 16)
            .wrapping_sub(hash)
    })
}

/// DJB hash by Daniel J. Bernstein (`hash * 33 + byte`, seeded with 5381)
#[must_use]
#[inline]
pub fn djb_hash(data: &[u8]) -> Word {
    data.iter().fold(DJB_INIT, |hash, &byte| {
        (hash << 5).wrapping_add(hash).wrapping_add(Word::from(byte))
    })
}

/// FNV style hash: multiply by 0x811C9DC5, then XOR the byte
///
/// Starts from zero and multiplies before XOR. This is neither FNV-1 nor
/// FNV-1a and must stay that way to reproduce the published values.
#[must_use]
#[inline]
pub fn fnv_hash(data: &[u8]) -> Word {
    let mut hash: Word = 0;
    for &byte in data {
        hash = hash.wrapping_mul(FNV_PRIME);
        hash ^= Word::from(byte);
    }
    hash
}
