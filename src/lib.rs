//! heapkit: an indexed binary max-heap with locator support.
//!
//! [`ds::IndexedMaxHeap`] hands out a [`ds::HeapIndex`] for every value it
//! stores so callers can update or delete arbitrary elements in O(log n), and
//! reports every relocation to a [`ds::HeapObserver`] so those handles can be
//! kept current. [`ds::GrowableArray`] is the doubling backing store.

pub mod ds;
pub mod error;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
