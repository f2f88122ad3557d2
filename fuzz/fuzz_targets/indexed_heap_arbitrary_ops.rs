#![no_main]

use libfuzzer_sys::fuzz_target;
use heapkit::ds::{HeapIndex, IndexedMaxHeap};
use heapkit::error::HeapError;

// Fuzz arbitrary operation sequences on IndexedMaxHeap
//
// Tests random sequences of push, pop, peek, remove_at, update_priority and
// clear against a plain Vec model of the live multiset.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let mut heap: IndexedMaxHeap<u8> = IndexedMaxHeap::new();
    let mut model: Vec<u8> = Vec::new();

    let mut idx = 0;
    while idx + 2 < data.len() {
        let op = data[idx] % 6;
        let arg = data[idx + 1];
        let value = data[idx + 2];

        match op {
            0 => {
                // push
                let at = heap.push(value);
                assert_eq!(heap.get(at), Some(&value));
                model.push(value);
            }
            1 => {
                // pop
                let expected = model.iter().copied().max();
                match heap.pop() {
                    Ok(v) => {
                        assert_eq!(Some(v), expected);
                        let pos = model.iter().position(|&m| m == v).unwrap();
                        model.swap_remove(pos);
                    }
                    Err(err) => {
                        assert_eq!(err, HeapError::Underflow);
                        assert!(model.is_empty());
                    }
                }
            }
            2 => {
                // peek
                assert_eq!(heap.peek().ok().copied(), model.iter().copied().max());
            }
            3 => {
                // remove_at, including out-of-range handles
                let raw = usize::from(arg) % (heap.len() + 2) + 1;
                let handle = HeapIndex::new(raw).unwrap();
                match heap.remove_at(handle) {
                    Ok(v) => {
                        let pos = model.iter().position(|&m| m == v).unwrap();
                        model.swap_remove(pos);
                    }
                    Err(err) => {
                        assert!(raw > model.len());
                        assert!(!err.is_underflow());
                    }
                }
            }
            4 => {
                // update_priority
                if heap.is_empty() {
                    idx += 3;
                    continue;
                }
                let raw = usize::from(arg) % heap.len() + 1;
                let handle = HeapIndex::new(raw).unwrap();
                let old = *heap.get(handle).unwrap();
                let rest = heap.update_priority(handle, value).unwrap();
                assert_eq!(heap.get(rest), Some(&value));
                if value > old {
                    assert!(rest <= handle);
                } else if value < old {
                    assert!(rest >= handle);
                } else {
                    assert_eq!(rest, handle);
                }
                let pos = model.iter().position(|&m| m == old).unwrap();
                model[pos] = value;
            }
            5 => {
                // clear
                heap.clear();
                model.clear();
                assert!(heap.is_empty());
            }
            _ => unreachable!(),
        }

        // Basic invariants
        assert_eq!(heap.len(), model.len());
        heap.check_invariants().unwrap();

        idx += 3;
    }
});
