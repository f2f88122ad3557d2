use std::sync::atomic::{AtomicU64, Ordering};

/// A metrics-only counter writable through `&self`.
///
/// Heaps behind `ConcurrentIndexedMaxHeap` record reads under a shared
/// read guard, so increments are atomic. Relaxed ordering suffices: the
/// counters never guard other memory.
#[repr(transparent)]
#[derive(Debug, Default)]
pub struct MetricsCell(AtomicU64);

impl MetricsCell {
    #[inline]
    pub fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    #[inline]
    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn incr(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }
}
