use heapkit::ds::IndexedMaxHeap;

fn main() {
    let mut heap = IndexedMaxHeap::new();
    for value in [5, 3, 8, 1, 9, 2] {
        let idx = heap.push(value);
        println!("pushed {value} -> {idx}");
    }

    println!("max: {:?}", heap.peek());

    let (three, _) = heap
        .iter()
        .find(|(_, v)| **v == 3)
        .expect("3 was pushed");
    let rest = heap.update_priority(three, 7).expect("handle is live");
    println!("raised 3 to 7, now at {rest}");

    let drained: Vec<_> = std::iter::from_fn(|| heap.pop().ok()).collect();
    println!("drained: {drained:?}");
    println!("peek on empty: {:?}", heap.peek());
}

// Expected output:
// pushed 5 -> #1
// pushed 3 -> #2
// pushed 8 -> #1
// pushed 1 -> #4
// pushed 9 -> #1
// pushed 2 -> #6
// max: Ok(9)
// raised 3 to 7, now at #5
// drained: [9, 8, 7, 5, 2, 1]
// peek on empty: Err(Underflow)
