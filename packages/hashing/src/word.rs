//! Accumulator word selection
//!
//! Every function in this crate folds into the same unsigned word. The width is
//! fixed at build time: 64 bits by default, 32 bits with the `word32` feature.
//! Outputs (and PJW's derived constants) depend on this choice, so pinned
//! values are only comparable between builds using the same width.

/// Unsigned accumulator type shared by all hash functions
#[cfg(not(feature = "word32"))]
pub type Word = u64;

/// Unsigned accumulator type shared by all hash functions
#[cfg(feature = "word32")]
pub type Word = u32;

/// Width of [`Word`] in bits
pub const WORD_BITS: u32 = Word::BITS;

/// Signature shared by every hash function
pub type HashFn = fn(&[u8]) -> Word;
