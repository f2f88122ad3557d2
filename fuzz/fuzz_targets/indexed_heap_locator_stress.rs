#![no_main]

use libfuzzer_sys::fuzz_target;
use heapkit::ds::{IndexedMaxHeap, KeyedLocator};
use std::collections::BTreeMap;

// Fuzz stress test for locator-driven use with reference validation
//
// Values are (priority, id) with unique ids; a BTreeMap id -> priority is the
// reference. After every operation the locator must point at the right slot
// for every live id.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let locator = KeyedLocator::new(|entry: &(u8, u8)| entry.1);
    let mut heap = IndexedMaxHeap::with_observer(locator);
    let mut reference: BTreeMap<u8, u8> = BTreeMap::new();

    for chunk in data.chunks(3) {
        if chunk.len() < 3 {
            break;
        }

        let op = chunk[0] % 4;
        let id = chunk[1];
        let priority = chunk[2];

        match op {
            0 => {
                // insert or reprioritise
                if reference.contains_key(&id) {
                    assert!(heap.update_key(&id, (priority, id)).is_some());
                } else {
                    heap.push((priority, id));
                }
                reference.insert(id, priority);
            }
            1 => {
                // remove by id
                let removed = heap.remove_key(&id);
                let expected = reference.remove(&id).map(|p| (p, id));
                assert_eq!(removed, expected);
            }
            2 => {
                // pop max
                let popped = heap.pop().ok();
                let expected = reference
                    .iter()
                    .map(|(&id, &p)| (p, id))
                    .max();
                assert_eq!(popped, expected);
                if let Some((_, id)) = popped {
                    reference.remove(&id);
                }
            }
            3 => {
                // lookup
                let got = heap.get_key(&id).copied();
                let expected = reference.get(&id).map(|&p| (p, id));
                assert_eq!(got, expected);
            }
            _ => unreachable!(),
        }

        assert_eq!(heap.len(), reference.len());
        assert_eq!(heap.observer().len(), reference.len());
        for (&id, &priority) in &reference {
            let idx = heap.index_of_key(&id).unwrap();
            assert_eq!(heap.get(idx), Some(&(priority, id)));
        }
        heap.check_invariants().unwrap();
    }
});
