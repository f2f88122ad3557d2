use std::io::Write;
use std::sync::Mutex;

use crate::metrics::snapshot::HeapMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for heap metrics snapshots.
///
/// This exporter writes in the Prometheus text exposition format so it can be
/// scraped by Prometheus or forwarded to an OpenTelemetry collector.
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send + Sync> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send + Sync> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the exporter and returns the underlying writer.
    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_metric(&self, kind: &str, name: &str, value: u64) {
        let mut writer = match self.writer.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let _ = writeln!(writer, "# TYPE {} {}", name, kind);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn write_counter(&self, suffix: &str, value: u64) {
        self.write_metric("counter", &self.metric_name(suffix), value);
    }

    fn write_gauge(&self, suffix: &str, value: u64) {
        self.write_metric("gauge", &self.metric_name(suffix), value);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write + Send + Sync> MetricsExporter<HeapMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &HeapMetricsSnapshot) {
        self.write_counter("push_calls_total", snapshot.push_calls);
        self.write_counter("pop_calls_total", snapshot.pop_calls);
        self.write_counter("pop_empty_total", snapshot.pop_empty);
        self.write_counter("peek_calls_total", snapshot.peek_calls);
        self.write_counter("peek_empty_total", snapshot.peek_empty);
        self.write_counter("remove_at_calls_total", snapshot.remove_at_calls);
        self.write_counter(
            "remove_last_shortcuts_total",
            snapshot.remove_last_shortcuts,
        );
        self.write_counter("update_calls_total", snapshot.update_calls);
        self.write_counter("update_unchanged_total", snapshot.update_unchanged);
        self.write_counter("out_of_range_total", snapshot.out_of_range);
        self.write_counter("sift_up_steps_total", snapshot.sift_up_steps);
        self.write_counter("sift_down_steps_total", snapshot.sift_down_steps);
        self.write_counter("grow_events_total", snapshot.grow_events);
        self.write_counter("clear_calls_total", snapshot.clear_calls);
        self.write_gauge("len", snapshot.heap_len as u64);
        self.write_gauge("capacity", snapshot.capacity as u64);
    }
}
