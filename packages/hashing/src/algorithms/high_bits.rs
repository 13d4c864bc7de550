//! High-bit folding hashes: PJW and its 32-bit tuned variant ELF

use crate::word::{WORD_BITS, Word};

const THREE_QUARTERS: u32 = WORD_BITS * 3 / 4;
const ONE_EIGHTH: u32 = WORD_BITS / 8;
// Bits of the 32-bit all-ones pattern shifted past the word are discarded, so
// on 64-bit words only the top byte is set.
const HIGH_BITS: Word = (u32::MAX as Word) << (WORD_BITS - ONE_EIGHTH);

const ELF_HIGH_NIBBLE: Word = 0xF000_0000;

/// Peter J. Weinberger's hash, as described in Aho, Sethi and Ullman
///
/// Shift and fold constants derive from [`WORD_BITS`], so the result differs
/// between 32-bit and 64-bit builds.
#[must_use]
#[inline]
pub fn pjw_hash(data: &[u8]) -> Word {
    let mut hash: Word = 0;
    for &byte in data {
        hash = (hash << ONE_EIGHTH).wrapping_add(Word::from(byte));
        let test = hash & HIGH_BITS;
        if test != 0 {
            hash = (hash ^ (test >> THREE_QUARTERS)) & !HIGH_BITS;
        }
    }
    hash
}

/// ELF hash, the PJW variant used for UNIX ELF symbol tables
///
/// The mask stays at `0xF0000000` for every word width. On 64-bit words a
/// carry out of `(hash << 4) + byte` can set bits above 31 that the mask never
/// clears, so rare inputs hash differently than on 32-bit words.
#[must_use]
#[inline]
pub fn elf_hash(data: &[u8]) -> Word {
    let mut hash: Word = 0;
    for &byte in data {
        hash = (hash << 4).wrapping_add(Word::from(byte));
        let x = hash & ELF_HIGH_NIBBLE;
        if x != 0 {
            hash ^= x >> 24;
        }
        hash &= !x;
    }
    hash
}
