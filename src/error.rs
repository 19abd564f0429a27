//! Failures from table construction and growth.
//!
//! Absence of a key is reported as a value (`None` from retrieve, `false`
//! from remove), never through this type.

/// Why a table could not be built or grown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// The bucket index is `hash % capacity`, so at least one bucket is
    /// required.
    #[error("capacity must be greater than zero")]
    ZeroCapacity,

    /// Doubling the bucket count overflowed `usize`.
    #[error("doubled capacity overflows usize")]
    CapacityOverflow,

    /// The allocator refused the bucket array.
    #[error("bucket array allocation failed")]
    OutOfMemory,
}
