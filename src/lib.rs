//! chained-table: a string-to-string hash table built from first principles
//! with separate chaining over a fixed-size bucket array.
//!
//! Internal Design:
//!
//! Summary
//! - `ChainedHashTable<H>` owns a boxed slice of bucket slots and a
//!   `SlotMap` arena of entries. A slot holds the arena key of its chain
//!   head (or `None`); each entry holds the key of its successor (or `None`).
//! - Every operation hashes the key with `H: KeyHash`, reduces it modulo the
//!   bucket count, and walks that one chain.
//!
//! Constraints
//! - Fixed bucket count chosen at construction; no resizing or rehashing, so
//!   a key always lives in the bucket it was first stored in.
//! - Keys are unique within a chain: `set` scans before appending.
//! - Chains are acyclic and end in `None`.
//! - Single-threaded use through `&mut self`; no interior mutability.
//!
//! Hashing
//! - The default `CharSum` hash adds the code points of the key's
//!   characters. It is deliberately weak: anagrams land in the same bucket.
//!   Collisions are resolved by key equality while walking the chain.
//!
//! Ownership
//! - The arena owns all entries. Links are arena keys, so there are no
//!   reference cycles and no `unsafe`. Removal relinks the predecessor (or
//!   the bucket slot) to the removed entry's successor, then frees the slot.
//!
//! Notes and non-goals
//! - No generic keys or values, no iteration API, no persistence.
//! - Missing keys are reported through `Option`/`bool`, never errors. The
//!   only error is `BuildError::ZeroBuckets` from fallible construction.

pub mod chained_table;
mod chained_table_proptest;
mod error;
pub mod hash;

// Public surface
pub use chained_table::{ChainedHashTable, DEFAULT_BUCKETS};
pub use error::BuildError;
pub use hash::{CharSum, KeyHash};
