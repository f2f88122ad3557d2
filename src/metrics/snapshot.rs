#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HeapMetricsSnapshot {
    pub push_calls: u64,

    pub pop_calls: u64,
    pub pop_empty: u64,

    pub peek_calls: u64,
    pub peek_empty: u64,

    pub remove_at_calls: u64,
    pub remove_last_shortcuts: u64, // remove_at of the last leaf, no repair sift

    pub update_calls: u64,
    pub update_unchanged: u64,

    pub out_of_range: u64,

    pub sift_up_steps: u64,
    pub sift_down_steps: u64,
    pub grow_events: u64,
    pub clear_calls: u64,

    // gauges captured at snapshot time
    pub heap_len: usize,
    pub capacity: usize,
}
