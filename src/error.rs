//! Error types.
//!
//! Mode operations return the store's own error type untouched, so the only
//! errors defined here belong to the alert classifier and the bundled
//! in-memory store.

use thiserror::Error;

/// Alert classification failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlertError {
    /// An empty probability sequence was classified.
    #[error("probability sequence is empty")]
    InvalidInput,

    /// A severity outside `0..=7` was used for a style lookup.
    #[error("severity {0} is outside 0..=7")]
    OutOfRange(u8),

    /// A channel was fed more horizons than it can retain.
    #[error("{len} prediction horizons exceed channel capacity of {max}")]
    TooManyHorizons { len: usize, max: usize },
}

/// Failures of [`MemoryStore`](crate::mode::MemoryStore).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StoreError {
    /// Every slot is taken by another key.
    #[error("store is full ({capacity} keys)")]
    Full { capacity: usize },
}
