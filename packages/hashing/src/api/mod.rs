//! Fluent hashing API
//!
//! Usage: `Hash::fnv().compute(data)` or
//! `Hash::djb().on_result(handler).compute(data)`

pub mod hash_builder;
pub mod hash_entry;

// Re-export main entry point
pub use hash_entry::Hash;

pub use hash_builder::{HashBuilder, HashBuilderWithHandler};
