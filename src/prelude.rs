pub use crate::ds::{
    GrowableArray, HeapIndex, HeapObserver, IndexedMaxHeap, KeyedLocator, NoopObserver,
};
#[cfg(feature = "concurrency")]
pub use crate::ds::ConcurrentIndexedMaxHeap;
pub use crate::error::{HeapError, InvariantError};
#[cfg(feature = "metrics")]
pub use crate::metrics::{HeapMetricsSnapshot, MetricsSnapshotProvider};
