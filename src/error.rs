//! Error types for the heapkit library.
//!
//! ## Key Components
//!
//! - [`HeapError`]: Returned when a caller violates an operation's
//!   precondition: reading the maximum of an empty heap, or addressing a
//!   handle / position outside the live range.
//! - [`InvariantError`]: Returned when internal data-structure invariants are
//!   violated (debug-only `check_invariants` methods).
//!
//! ## Example Usage
//!
//! ```
//! use heapkit::ds::IndexedMaxHeap;
//! use heapkit::error::HeapError;
//!
//! let mut heap: IndexedMaxHeap<u32> = IndexedMaxHeap::new();
//! assert_eq!(heap.pop(), Err(HeapError::Underflow));
//!
//! let idx = heap.push(7);
//! assert_eq!(heap.pop(), Ok(7));
//!
//! // The handle is stale once its value has left the heap.
//! assert!(matches!(
//!     heap.remove_at(idx),
//!     Err(HeapError::OutOfRange { index: 1, len: 0 })
//! ));
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// HeapError
// ---------------------------------------------------------------------------

/// Error returned by heap and backing-array operations.
///
/// Every variant is a local contract violation detected at the point of
/// misuse; nothing is retried and the structure is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `peek`/`pop` on an empty container.
    Underflow,
    /// A handle or position outside the live range.
    ///
    /// For heap handles `index` is 1-based and `len` is the number of live
    /// elements, so valid handles are `1..=len`. For the backing array
    /// `index` is 0-based and valid positions are `0..len`.
    OutOfRange { index: usize, len: usize },
}

impl HeapError {
    /// Returns `true` for [`HeapError::Underflow`].
    #[inline]
    pub fn is_underflow(&self) -> bool {
        matches!(self, HeapError::Underflow)
    }
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Underflow => f.write_str("empty heap: no maximum exists"),
            HeapError::OutOfRange { index, len } => {
                write!(f, "index {} out of range for length {}", index, len)
            },
        }
    }
}

impl std::error::Error for HeapError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal heap invariants are violated.
///
/// Produced by debug-only `check_invariants` methods
/// (e.g. [`IndexedMaxHeap::check_invariants`](crate::ds::IndexedMaxHeap::check_invariants)).
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
