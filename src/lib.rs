//! chain-hashmap: a string-keyed hash table with a fixed bucket array,
//! djb2 bucket placement, chained collision resolution, and explicit
//! capacity-doubling resize.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: express the classic chained hash table safely, with the chain
//!   surgery (head removal, interior unlink, tail append) and the
//!   full-table rebuild as plain data edits rather than pointer juggling.
//! - Layers:
//!   - `hash`: the fixed djb2 function and bucket indexing. Contractual;
//!     collision behavior is observable through chain layout, so this is
//!     not swappable for the std hasher.
//!   - `chain_map::ChainHashMap`: a `Vec` of chain heads plus a slotmap
//!     arena that owns every entry. Chains are singly linked lists of
//!     arena keys; a stale key can at worst miss, never dangle, and
//!     dropping the arena releases each node exactly once.
//!   - `error`: construction and growth failures. Absence of a key is a
//!     value (`None`/`false`), never an error.
//!
//! Constraints
//! - Single-threaded: callers serialize access; nothing here locks.
//! - Capacity is fixed per table value. The bucket index is
//!   `djb2(key) % capacity`, so growth must rebuild: `resize` consumes
//!   the table, re-inserts every entry under the doubled modulus, and
//!   returns the replacement. A failed resize hands the untouched
//!   original back inside the error.
//! - Keys and values are owned `String` copies; the table never aliases
//!   caller memory.
//! - Growth is caller-invoked only; insert never resizes on its own.
//!
//! Notes and non-goals
//! - No thread-safety, persistence, generic key/value types, iteration
//!   order guarantees, or shrink-on-delete.
//! - The `logging` feature adds trace output on structural operations;
//!   without it the trace macro compiles to nothing.

#[cfg(feature = "logging")]
macro_rules! trace_op {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}
#[cfg(not(feature = "logging"))]
macro_rules! trace_op {
    ($($arg:tt)*) => {};
}

mod chain_map;
mod chain_map_proptest;
mod error;
pub mod hash;

// Public surface
pub use chain_map::{ChainHashMap, Iter, ResizeError};
pub use error::TableError;
