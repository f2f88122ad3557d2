//! Move observers and caller-side locators for [`IndexedMaxHeap`].
//!
//! The heap never owns a value→handle map. Instead it reports every
//! placement and removal to an injected [`HeapObserver`], which lets a caller
//! keep its own locator in sync across the swaps performed by sifting.
//!
//! ## Key Components
//!
//! - [`HeapObserver`]: Callback trait invoked by the heap on every move
//! - [`NoopObserver`]: Zero-sized default; compiles away entirely
//! - [`KeyedLocator`]: Ready-made locator mapping a caller key to its handle
//!
//! ## Example Usage
//!
//! ```
//! use heapkit::ds::{IndexedMaxHeap, KeyedLocator};
//!
//! // (priority, task id); the locator is keyed by task id.
//! let locator = KeyedLocator::new(|entry: &(u32, &'static str)| entry.1);
//! let mut heap = IndexedMaxHeap::with_observer(locator);
//!
//! heap.push((3, "compile"));
//! heap.push((7, "deploy"));
//! heap.push((5, "test"));
//!
//! // Raise "compile" above everything else without knowing where it sits.
//! heap.update_key(&"compile", (9, "compile")).unwrap();
//! assert_eq!(heap.peek(), Ok(&(9, "compile")));
//!
//! // Drop "deploy" wherever it currently is.
//! assert_eq!(heap.remove_key(&"deploy"), Some((7, "deploy")));
//! assert_eq!(heap.len(), 2);
//! ```
//!
//! [`IndexedMaxHeap`]: crate::ds::IndexedMaxHeap

use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::ds::indexed_heap::HeapIndex;

/// Receives notifications whenever the heap places, moves or drops a value.
///
/// Both methods default to no-ops so implementors override only what they
/// track.
pub trait HeapObserver<T> {
    /// `value` now lives at `to`.
    ///
    /// `from` is `None` when the value was just inserted and `Some(old)` when
    /// an existing value was relocated by a sift or by swap-with-last.
    fn on_move(&mut self, value: &T, from: Option<HeapIndex>, to: HeapIndex) {
        let _ = (value, from, to);
    }

    /// `value` left the heap; it was last stored at `from`.
    ///
    /// `update_priority` also reports the value it overwrites here, followed
    /// by an `on_move` for the replacement.
    fn on_remove(&mut self, value: &T, from: HeapIndex) {
        let _ = (value, from);
    }
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoopObserver;

impl<T> HeapObserver<T> for NoopObserver {}

/// Locator keyed by a caller-supplied projection of each value.
///
/// Keys must be unique among live values; pushing a second value with a key
/// already present makes the older entry unreachable through the locator.
pub struct KeyedLocator<K, F> {
    positions: FxHashMap<K, HeapIndex>,
    key_of: F,
}

impl<K, F> KeyedLocator<K, F>
where
    K: Eq + Hash,
{
    /// Creates a locator that identifies values by `key_of(value)`.
    pub fn new(key_of: F) -> Self {
        Self {
            positions: FxHashMap::default(),
            key_of,
        }
    }

    pub fn with_capacity(capacity: usize, key_of: F) -> Self {
        Self {
            positions: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            key_of,
        }
    }

    /// Returns the current handle of the value keyed by `key`.
    pub fn index_of(&self, key: &K) -> Option<HeapIndex> {
        self.positions.get(key).copied()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }

    /// The key projection this locator was built with.
    pub fn key_fn(&self) -> &F {
        &self.key_of
    }

    /// Number of keys currently tracked.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterates over `(key, handle)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, HeapIndex)> {
        self.positions.iter().map(|(key, &index)| (key, index))
    }
}

impl<T, K, F> HeapObserver<T> for KeyedLocator<K, F>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    fn on_move(&mut self, value: &T, _from: Option<HeapIndex>, to: HeapIndex) {
        self.positions.insert((self.key_of)(value), to);
    }

    fn on_remove(&mut self, value: &T, from: HeapIndex) {
        let key = (self.key_of)(value);
        if self.positions.get(&key) == Some(&from) {
            self.positions.remove(&key);
        }
    }
}

impl<K, F> fmt::Debug for KeyedLocator<K, F>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedLocator")
            .field("positions", &self.positions)
            .finish_non_exhaustive()
    }
}
