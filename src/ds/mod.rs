pub mod growable_array;
pub mod indexed_heap;
pub mod observer;

pub use growable_array::{DEFAULT_INITIAL_CAPACITY, GrowableArray};
#[cfg(feature = "concurrency")]
pub use indexed_heap::ConcurrentIndexedMaxHeap;
pub use indexed_heap::{HeapIndex, IndexedMaxHeap};
pub use observer::{HeapObserver, KeyedLocator, NoopObserver};
