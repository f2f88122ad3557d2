//! Opt-in operation counters for heapkit structures (feature `metrics`).
//!
//! Recording, snapshotting and export are split into separate traits so the
//! heap only ever writes counters; readers work on copies.

pub mod cell;
pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;

pub use exporter::PrometheusTextExporter;
pub use snapshot::HeapMetricsSnapshot;
pub use traits::{MetricsExporter, MetricsReset, MetricsSnapshotProvider};
