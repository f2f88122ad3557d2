//! # Metrics Trait Hierarchy
//!
//! ```text
//!   ┌────────────────────────────┐   ┌────────────────────────────┐
//!   │    HeapMetricsRecorder     │   │  HeapMetricsReadRecorder   │
//!   │  push/pop/remove/update    │   │  peek / out-of-range       │
//!   │  sift steps / growth       │   │  (&self, interior cells)   │
//!   └─────────────┬──────────────┘   └─────────────┬──────────────┘
//!                 └───────────────┬────────────────┘
//!                                 ▼
//!                        ┌─────────────────┐
//!                        │   HeapMetrics   │
//!                        └────────┬────────┘
//!                                 │ snapshot(len, capacity)
//!                                 ▼
//!   ┌──────────────────────────────┐    ┌──────────────────────────────┐
//!   │ MetricsSnapshotProvider<S>   │    │ MetricsExporter<S>           │
//!   │ (bench/test)                 │    │ (production monitoring)      │
//!   └──────────────────────────────┘    └──────────────────────────────┘
//! ```
//!
//! Recorders only write counters; providers only read/snapshot; exporters
//! only publish.

/// Counters written by `&mut self` heap operations.
pub trait HeapMetricsRecorder {
    fn record_push_call(&mut self);
    fn record_pop_call(&mut self);
    fn record_pop_empty(&mut self);
    fn record_remove_at_call(&mut self);
    fn record_remove_last_shortcut(&mut self);
    fn record_update_call(&mut self);
    fn record_update_unchanged(&mut self);
    fn record_sift_up_steps(&mut self, steps: u64);
    fn record_sift_down_steps(&mut self, steps: u64);
    fn record_grow(&mut self);
    fn record_clear(&mut self);
}

/// Counters written by `&self` heap operations (uses interior mutability).
pub trait HeapMetricsReadRecorder {
    fn record_peek_call(&self);
    fn record_peek_empty(&self);
    fn record_out_of_range(&self);
}

/// Snapshot provider for bench/testing.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Reset metrics between tests or benchmark iterations.
pub trait MetricsReset {
    fn reset_metrics(&mut self);
}

/// Export/publish metrics to production monitoring backends.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
