//! Shortest paths with decrease-key through a keyed locator.
//!
//! Run with: `RUST_LOG=debug cargo run --example locator_dijkstra`

use std::cmp::Reverse;

use heapkit::ds::{IndexedMaxHeap, KeyedLocator};
use log::{debug, info};

/// (Reverse(distance), node): the max-heap pops the closest node first.
type Entry = (Reverse<u64>, usize);

fn shortest_paths(adjacency: &[Vec<(usize, u64)>], source: usize) -> Vec<Option<u64>> {
    let mut dist: Vec<Option<u64>> = vec![None; adjacency.len()];
    let mut frontier =
        IndexedMaxHeap::with_observer(KeyedLocator::new(|entry: &Entry| entry.1));

    dist[source] = Some(0);
    frontier.push((Reverse(0), source));

    while let Ok((Reverse(d), node)) = frontier.pop() {
        debug!("settled node {} at distance {}", node, d);
        for &(next, weight) in &adjacency[node] {
            let candidate = d + weight;
            match dist[next] {
                Some(known) if known <= candidate => continue,
                _ => {},
            }
            dist[next] = Some(candidate);
            if frontier.index_of_key(&next).is_some() {
                let idx = frontier.update_key(&next, (Reverse(candidate), next));
                debug!("decrease-key node {} to {} (now at {:?})", next, candidate, idx);
            } else {
                frontier.push((Reverse(candidate), next));
            }
        }
    }
    dist
}

fn main() {
    env_logger::init();

    // Edges: 0->1 (4), 0->2 (1), 2->1 (2), 1->3 (1), 2->3 (5); node 4 is isolated.
    let adjacency = vec![
        vec![(1, 4), (2, 1)],
        vec![(3, 1)],
        vec![(1, 2), (3, 5)],
        vec![],
        vec![],
    ];

    let dist = shortest_paths(&adjacency, 0);
    for (node, d) in dist.iter().enumerate() {
        match d {
            Some(d) => info!("node {node}: {d}"),
            None => info!("node {node}: unreachable"),
        }
        println!("node {node}: {d:?}");
    }
}

// Expected output:
// node 0: Some(0)
// node 1: Some(3)
// node 2: Some(1)
// node 3: Some(4)
// node 4: None
