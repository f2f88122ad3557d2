use crate::metrics::cell::MetricsCell;
use crate::metrics::snapshot::HeapMetricsSnapshot;
use crate::metrics::traits::{HeapMetricsReadRecorder, HeapMetricsRecorder};

#[derive(Debug, Default)]
pub struct HeapMetrics {
    pub push_calls: u64,
    pub pop_calls: u64,
    pub pop_empty: u64,
    pub peek_calls: MetricsCell,
    pub peek_empty: MetricsCell,
    pub remove_at_calls: u64,
    pub remove_last_shortcuts: u64,
    pub update_calls: u64,
    pub update_unchanged: u64,
    pub out_of_range: MetricsCell,
    pub sift_up_steps: u64,
    pub sift_down_steps: u64,
    pub grow_events: u64,
    pub clear_calls: u64,
}

impl HeapMetrics {
    pub fn snapshot(&self, heap_len: usize, capacity: usize) -> HeapMetricsSnapshot {
        HeapMetricsSnapshot {
            push_calls: self.push_calls,
            pop_calls: self.pop_calls,
            pop_empty: self.pop_empty,
            peek_calls: self.peek_calls.get(),
            peek_empty: self.peek_empty.get(),
            remove_at_calls: self.remove_at_calls,
            remove_last_shortcuts: self.remove_last_shortcuts,
            update_calls: self.update_calls,
            update_unchanged: self.update_unchanged,
            out_of_range: self.out_of_range.get(),
            sift_up_steps: self.sift_up_steps,
            sift_down_steps: self.sift_down_steps,
            grow_events: self.grow_events,
            clear_calls: self.clear_calls,
            heap_len,
            capacity,
        }
    }
}

impl HeapMetricsRecorder for HeapMetrics {
    fn record_push_call(&mut self) {
        self.push_calls += 1;
    }

    fn record_pop_call(&mut self) {
        self.pop_calls += 1;
    }

    fn record_pop_empty(&mut self) {
        self.pop_empty += 1;
    }

    fn record_remove_at_call(&mut self) {
        self.remove_at_calls += 1;
    }

    fn record_remove_last_shortcut(&mut self) {
        self.remove_last_shortcuts += 1;
    }

    fn record_update_call(&mut self) {
        self.update_calls += 1;
    }

    fn record_update_unchanged(&mut self) {
        self.update_unchanged += 1;
    }

    fn record_sift_up_steps(&mut self, steps: u64) {
        self.sift_up_steps += steps;
    }

    fn record_sift_down_steps(&mut self, steps: u64) {
        self.sift_down_steps += steps;
    }

    fn record_grow(&mut self) {
        self.grow_events += 1;
    }

    fn record_clear(&mut self) {
        self.clear_calls += 1;
    }
}

impl HeapMetricsReadRecorder for HeapMetrics {
    fn record_peek_call(&self) {
        self.peek_calls.incr();
    }

    fn record_peek_empty(&self) {
        self.peek_empty.incr();
    }

    fn record_out_of_range(&self) {
        self.out_of_range.incr();
    }
}
