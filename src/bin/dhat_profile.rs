//! DHAT heap profiler for heapkit.
//!
//! Run with: cargo run --bin dhat_profile --release --features dhat-heap
//! View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use heapkit::ds::{HeapIndex, IndexedMaxHeap, KeyedLocator};

/// Simple XorShift64 RNG for deterministic workloads.
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

/// Grow from empty one push at a time, then drain.
fn profile_push_pop() {
    println!("=== Profiling push/pop ===");
    let operations = 200_000;
    let mut rng = XorShift64::new(42);

    let mut heap = IndexedMaxHeap::new();
    for _ in 0..operations {
        heap.push(rng.next_u64());
    }
    println!("  Peak size: {} (capacity {})", heap.len(), heap.capacity());

    while heap.pop().is_ok() {}
    println!("  Final size: {}", heap.len());
}

/// Random priority churn on a steady-state heap.
fn profile_update_churn() {
    println!("=== Profiling update_priority churn ===");
    let size = 65_536;
    let operations = 200_000;
    let mut rng = XorShift64::new(7);

    let mut heap = IndexedMaxHeap::with_capacity(size);
    heap.extend((0..size).map(|_| rng.next_u64()));

    for _ in 0..operations {
        let raw = (rng.next_u64() as usize) % heap.len() + 1;
        if let Some(idx) = HeapIndex::new(raw) {
            let _ = heap.update_priority(idx, rng.next_u64());
        }
    }
    println!("  Final size: {}", heap.len());
}

/// Keyed locator bookkeeping alongside remove/push churn.
fn profile_locator() {
    println!("=== Profiling keyed locator ===");
    let size = 32_768u64;
    let operations = 100_000u64;
    let mut rng = XorShift64::new(99);

    let locator = KeyedLocator::with_capacity(size as usize, |entry: &(u64, u64)| entry.1);
    let mut heap = IndexedMaxHeap::with_observer(locator);
    for id in 0..size {
        heap.push((rng.next_u64(), id));
    }

    for _ in 0..operations {
        let id = rng.next_u64() % size;
        if let Some((_, id)) = heap.remove_key(&id) {
            heap.push((rng.next_u64(), id));
        }
    }
    println!("  Final size: {}", heap.len());
}

fn main() {
    let _profiler = dhat::Profiler::new_heap();

    println!("heapkit DHAT Heap Profiling");
    println!("===========================\n");

    profile_push_pop();
    profile_update_churn();
    profile_locator();

    println!("\n===========================");
    println!("Profile written to dhat-heap.json");
}
