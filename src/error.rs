//! Errors reported by [`Heap`][crate::heap::Heap] removals.
//!
//! A missing key in a [`Tree`][crate::tree::Tree] is not an error. Lookups and deletes just hand
//! back `None`.

use thiserror::Error;

/// Why a record couldn't be removed from a heap.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HeapError {
    /// There was nothing in the heap to remove.
    #[error("heap is empty, nothing to remove")]
    Empty,

    /// The requested slot doesn't exist.
    #[error("index {index} is out of range for a heap of {len} records")]
    OutOfRange {
        /// The index that was asked for.
        index: usize,
        /// How many records the heap held at the time.
        len: usize,
    },
}
