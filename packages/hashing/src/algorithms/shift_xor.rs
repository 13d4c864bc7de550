//! Shift-and-mix hashes: JS, DEK, BP and AP
//!
//! None of these multiply the accumulator by a constant; they rely on shifts,
//! XOR and (for JS and AP) addition.

use crate::word::Word;

const JS_INIT: Word = 1_315_423_911;
const AP_INIT: Word = 0xAAAA_AAAA;

/// Bitwise hash by Justin Sobel
#[must_use]
#[inline]
pub fn js_hash(data: &[u8]) -> Word {
    let mut hash = JS_INIT;
    for &byte in data {
        hash ^= (hash << 5)
            .wrapping_add(Word::from(byte))
            .wrapping_add(hash >> 2);
    }
    hash
}

/// Knuth's hash from TAOCP volume 3, section 6.4
///
/// The accumulator is seeded with the input length (truncated to the word), so
/// empty input hashes to zero.
#[must_use]
#[inline]
pub fn dek_hash(data: &[u8]) -> Word {
    let mut hash = data.len() as Word;
    for &byte in data {
        hash = (hash << 5) ^ (hash >> 27) ^ Word::from(byte);
    }
    hash
}

/// BP hash: shift left by seven and XOR in the byte
#[must_use]
#[inline]
pub fn bp_hash(data: &[u8]) -> Word {
    data.iter()
        .fold(0, |hash: Word, &byte| (hash << 7) ^ Word::from(byte))
}

/// Arash Partow's hybrid rotative/additive hash
///
/// Even positions (0-indexed) and odd positions use different mixing steps.
#[must_use]
#[inline]
pub fn ap_hash(data: &[u8]) -> Word {
    let mut hash = AP_INIT;
    for (i, &byte) in data.iter().enumerate() {
        let byte = Word::from(byte);
        if i & 1 == 0 {
            hash ^= (hash << 7) ^ byte.wrapping_mul(hash >> 3);
        } else {
            hash ^= !((hash << 11).wrapping_add(byte ^ (hash >> 5)));
        }
    }
    hash
}
