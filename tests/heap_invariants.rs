// ==============================================
// INDEXED HEAP INVARIANT TESTS (integration)
// ==============================================
//
// End-to-end scenarios through the public API: the canonical push/pop
// sequences, arbitrary removal, directional updates, and locator-driven use
// the way a host algorithm would drive the heap.

use heapkit::ds::{HeapIndex, HeapObserver, IndexedMaxHeap, KeyedLocator};
use heapkit::error::HeapError;

fn heap_of(values: &[i32]) -> IndexedMaxHeap<i32> {
    let mut heap = IndexedMaxHeap::new();
    for &v in values {
        heap.push(v);
    }
    heap
}

fn drain<O: HeapObserver<i32>>(heap: &mut IndexedMaxHeap<i32, O>) -> Vec<i32> {
    std::iter::from_fn(|| heap.pop().ok()).collect()
}

// ==============================================
// Canonical Scenarios
// ==============================================

mod scenarios {
    use super::*;

    #[test]
    fn peek_after_mixed_pushes() {
        let heap = heap_of(&[5, 3, 8, 1, 9, 2]);
        assert_eq!(heap.peek(), Ok(&9));
    }

    #[test]
    fn pops_come_out_descending() {
        let mut heap = heap_of(&[5, 3, 8, 1, 9, 2]);
        assert_eq!(drain(&mut heap), vec![9, 8, 5, 3, 2, 1]);
    }

    #[test]
    fn remove_four_from_zero_through_nine() {
        let mut heap = heap_of(&(0..10).collect::<Vec<_>>());
        let (four, _) = heap
            .iter()
            .find(|(_, v)| **v == 4)
            .expect("4 was pushed");

        assert_eq!(heap.remove_at(four), Ok(4));
        heap.check_invariants().unwrap();
        assert_eq!(heap.len(), 9);
        assert_eq!(drain(&mut heap), vec![9, 8, 7, 6, 5, 3, 2, 1, 0]);
    }

    #[test]
    fn single_push_pop_then_underflow() {
        let mut heap = heap_of(&[1]);
        assert_eq!(heap.pop(), Ok(1));
        assert_eq!(heap.len(), 0);
        assert_eq!(heap.peek(), Err(HeapError::Underflow));
        assert_eq!(heap.pop(), Err(HeapError::Underflow));
    }
}

// ==============================================
// Size Accounting
// ==============================================

mod size_accounting {
    use super::*;

    #[test]
    fn len_tracks_pushes_minus_successful_removals() {
        let mut heap = IndexedMaxHeap::new();
        let mut expected = 0usize;

        for round in 0..50i32 {
            heap.push(round * 7 % 13);
            expected += 1;
            if round % 3 == 0 && heap.pop().is_ok() {
                expected -= 1;
            }
            if round % 5 == 0 && !heap.is_empty() {
                let last = HeapIndex::new(heap.len()).unwrap();
                heap.remove_at(last).unwrap();
                expected -= 1;
            }
            // Failed removals never change the size.
            let past_end = HeapIndex::new(heap.len() + 1).unwrap();
            assert!(heap.remove_at(past_end).is_err());
            assert_eq!(heap.len(), expected);
        }
    }

    #[test]
    fn capacity_grows_but_never_below_len() {
        let mut heap = IndexedMaxHeap::with_capacity(2);
        for i in 0..1000u32 {
            heap.push(i);
            assert!(heap.capacity() >= heap.len());
        }
    }
}

// ==============================================
// Directional Updates
// ==============================================

mod updates {
    use super::*;

    #[test]
    fn raising_every_leaf_to_the_top() {
        let mut heap = heap_of(&(0..32).collect::<Vec<_>>());
        let mut top = 100;
        for raw in (17..=32).rev() {
            let idx = HeapIndex::new(raw).unwrap();
            let rest = heap.update_priority(idx, top).unwrap();
            assert!(rest.is_root());
            heap.check_invariants().unwrap();
            top += 1;
        }
    }

    #[test]
    fn lowering_the_root_sinks_to_a_leaf() {
        let mut heap = heap_of(&(0..31).collect::<Vec<_>>());
        let rest = heap.update_priority(HeapIndex::ROOT, -1).unwrap();
        // A full tree of 31 has leaves at 16..=31.
        assert!(rest.index() >= 16);
        heap.check_invariants().unwrap();
        assert_eq!(heap.peek(), Ok(&29));
    }
}

// ==============================================
// Locator-Driven Use
// ==============================================
//
// A host that tracks "where did my value land" through an observer and
// drives removal and re-prioritisation by key.

mod locators {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
    struct Job {
        priority: u32,
        id: u32,
    }

    fn job(priority: u32, id: u32) -> Job {
        Job { priority, id }
    }

    #[test]
    fn reprioritise_and_cancel_jobs_by_id() {
        let mut queue = IndexedMaxHeap::with_observer(KeyedLocator::new(|j: &Job| j.id));
        for (id, priority) in [(1, 10), (2, 40), (3, 25), (4, 5), (5, 30)] {
            queue.push(job(priority, id));
        }

        queue.update_key(&4, job(99, 4)).unwrap();
        assert_eq!(queue.peek().map(|j| j.id), Ok(4));

        assert_eq!(queue.remove_key(&2), Some(job(40, 2)));
        assert!(queue.index_of_key(&2).is_none());
        queue.check_invariants().unwrap();

        let order: Vec<u32> = std::iter::from_fn(|| queue.pop().ok())
            .map(|j| j.id)
            .collect();
        assert_eq!(order, vec![4, 5, 3, 1]);
        assert!(queue.observer().is_empty());
    }

    #[test]
    fn locator_handles_always_resolve_to_their_value() {
        let mut heap = IndexedMaxHeap::with_observer(KeyedLocator::new(|v: &u64| *v));
        let mut state = 0x9E37_79B9_7F4A_7C15u64;
        for step in 0..500u64 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            match state % 4 {
                0 | 1 => {
                    // Distinct keys: mix the step in.
                    heap.push((state % 10_000) * 1000 + step);
                },
                2 => {
                    let _ = heap.pop();
                },
                _ => {
                    let first = heap.observer().iter().next().map(|(key, _)| *key);
                    if let Some(key) = first {
                        assert_eq!(heap.remove_key(&key), Some(key));
                    }
                },
            }

            assert_eq!(heap.observer().len(), heap.len());
            for (key, idx) in heap.observer().iter() {
                assert_eq!(heap.get(idx), Some(key));
            }
            heap.check_invariants().unwrap();
        }
    }

    #[test]
    fn custom_observer_sees_every_removal() {
        #[derive(Default)]
        struct Tally {
            placed: usize,
            removed: usize,
        }

        impl HeapObserver<i32> for Tally {
            fn on_move(&mut self, _: &i32, from: Option<HeapIndex>, _: HeapIndex) {
                if from.is_none() {
                    self.placed += 1;
                }
            }

            fn on_remove(&mut self, _: &i32, _: HeapIndex) {
                self.removed += 1;
            }
        }

        let mut heap = IndexedMaxHeap::with_observer(Tally::default());
        heap.extend([4, 8, 15, 16, 23, 42]);
        heap.pop().unwrap();
        heap.remove_at(HeapIndex::new(3).unwrap()).unwrap();
        heap.clear();

        let tally = heap.into_observer();
        assert_eq!(tally.placed, 6);
        assert_eq!(tally.removed, 6);
    }
}
