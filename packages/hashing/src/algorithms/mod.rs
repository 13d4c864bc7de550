//! Hash algorithm implementations
//!
//! Eleven independent functions grouped by how they mix each byte in. None of
//! them share state or helpers.

pub mod high_bits;
pub mod multiplicative;
pub mod shift_xor;

pub use high_bits::{elf_hash, pjw_hash};
pub use multiplicative::{bkdr_hash, djb_hash, fnv_hash, rs_hash, sdb_hash};
pub use shift_xor::{ap_hash, bp_hash, dek_hash, js_hash};
