//! Indexed binary max-heap with in-place update and removal by handle.
//!
//! A priority queue whose `push` returns the handle ([`HeapIndex`]) where the
//! value came to rest. Callers that keep those handles (a *locator*) can
//! change the priority of, or delete, any live element, not only the current
//! maximum. Every relocation is reported to an injected
//! [`HeapObserver`](crate::ds::HeapObserver), so a locator can stay in sync
//! without the heap owning a reverse index.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   IndexedMaxHeap<T, O> Layout                           │
//! │                                                                         │
//! │   Handles are 1-based: parent(i) = i / 2, children = 2i, 2i + 1         │
//! │   Handle h is stored at backing position h - 1 (no sentinel slot)       │
//! │                                                                         │
//! │                          [1] 9                                          │
//! │                        /       \                                        │
//! │                  [2] 5           [3] 8                                  │
//! │                 /     \         /                                       │
//! │             [4] 1   [5] 3   [6] 2                                       │
//! │                                                                         │
//! │   data: GrowableArray<T>                                                │
//! │   position:   0   1   2   3   4   5                                     │
//! │             ┌───┬───┬───┬───┬───┬───┐                                   │
//! │             │ 9 │ 5 │ 8 │ 1 │ 3 │ 2 │                                   │
//! │             └───┴───┴───┴───┴───┴───┘                                   │
//! │   handle:     1   2   3   4   5   6                                     │
//! │                                                                         │
//! │   observer: O   (notified on every placement / relocation / removal)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//!
//! Remove Flow (remove_at(i), also used by pop with i = 1)
//! ───────────
//!   1. i == last?  → truncate, done (nothing moves into the hole)
//!   2. swap(i, last), truncate; the old last leaf now sits at i
//!   3. moved > removed → sift up;  moved < removed → sift down;  equal → stay
//!
//! Update Flow (update_priority(i, v))
//! ───────────
//!   v > old → sift up;  v < old → sift down;  v == old → no movement
//! ```
//!
//! ## Operations
//!
//! | Operation         | Description                              | Complexity |
//! |-------------------|------------------------------------------|------------|
//! | `push`            | Insert, return resting handle            | O(log n)   |
//! | `peek`            | Current maximum                          | O(1)       |
//! | `pop`             | Remove and return the maximum            | O(log n)   |
//! | `remove_at`       | Remove the value at a handle             | O(log n)   |
//! | `update_priority` | Replace the value at a handle            | O(log n)   |
//! | `from_vec`        | Bottom-up heapify                        | O(n)       |
//! | `into_sorted_vec` | In-place heap sort, ascending            | O(n log n) |
//!
//! ## Example Usage
//!
//! ```
//! use heapkit::ds::IndexedMaxHeap;
//!
//! let mut heap = IndexedMaxHeap::new();
//! for value in [5, 3, 8, 1, 9, 2] {
//!     heap.push(value);
//! }
//! assert_eq!(heap.peek(), Ok(&9));
//!
//! // Find the handle holding 3 and lower it below everything else.
//! let (idx, _) = heap.iter().find(|(_, v)| **v == 3).unwrap();
//! heap.update_priority(idx, 0).unwrap();
//!
//! let drained: Vec<_> = std::iter::from_fn(|| heap.pop().ok()).collect();
//! assert_eq!(drained, vec![9, 8, 5, 2, 1, 0]);
//! ```
//!
//! ## Handles
//!
//! A [`HeapIndex`] names a slot, not a value. Any operation that moves values
//! may give a handle a different occupant; a handle past the end of the heap
//! is rejected with [`HeapError::OutOfRange`]. Use an observer (see
//! [`KeyedLocator`](crate::ds::KeyedLocator)) to follow a value across moves.
//!
//! ## Thread Safety
//!
//! `IndexedMaxHeap` is not thread-safe. Wrap in a mutex for concurrent
//! access, or enable the `concurrency` feature for
//! `ConcurrentIndexedMaxHeap`.

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

use crate::ds::growable_array::GrowableArray;
use crate::ds::observer::{HeapObserver, KeyedLocator, NoopObserver};
use crate::error::HeapError;
#[cfg(any(test, debug_assertions))]
use crate::error::InvariantError;
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::HeapMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::HeapMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    HeapMetricsReadRecorder, HeapMetricsRecorder, MetricsReset, MetricsSnapshotProvider,
};

/// 1-based handle of a slot in an [`IndexedMaxHeap`]. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeapIndex(pub(crate) usize);

impl HeapIndex {
    /// Handle of the root, where the maximum lives.
    pub const ROOT: HeapIndex = HeapIndex(1);

    /// Builds a handle from a raw 1-based index; `None` for 0.
    pub fn new(raw: usize) -> Option<Self> {
        (raw != 0).then_some(Self(raw))
    }

    /// Returns the raw 1-based index.
    pub fn index(self) -> usize {
        self.0
    }

    /// Handle of the parent slot, or `None` for the root.
    pub fn parent(self) -> Option<Self> {
        Self::new(self.0 / 2)
    }

    pub fn left_child(self) -> Self {
        Self(self.0 * 2)
    }

    pub fn right_child(self) -> Self {
        Self(self.0 * 2 + 1)
    }

    pub fn is_root(self) -> bool {
        self.0 == 1
    }
}

impl fmt::Display for HeapIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Binary max-heap addressed by stable-until-moved 1-based handles.
///
/// # Type Parameters
///
/// - `T`: Value type; ordering uses `T: Ord`
/// - `O`: Move observer (defaults to [`NoopObserver`])
///
/// # Example
///
/// ```
/// use heapkit::ds::IndexedMaxHeap;
/// use heapkit::error::HeapError;
///
/// let mut heap = IndexedMaxHeap::new();
/// let a = heap.push(10);
/// let b = heap.push(20);
/// assert_eq!(a.index(), 1);
/// assert_eq!(b.index(), 1); // 20 bubbled above 10
///
/// assert_eq!(heap.pop(), Ok(20));
/// assert_eq!(heap.pop(), Ok(10));
/// assert_eq!(heap.peek(), Err(HeapError::Underflow));
/// ```
pub struct IndexedMaxHeap<T, O = NoopObserver> {
    data: GrowableArray<T>,
    observer: O,
    #[cfg(feature = "metrics")]
    metrics: HeapMetrics,
}

impl<T: Ord> IndexedMaxHeap<T> {
    /// Creates an empty heap without an observer.
    pub fn new() -> Self {
        Self::with_observer(NoopObserver)
    }

    /// Creates an empty heap with room for `capacity` values.
    ///
    /// ```
    /// use heapkit::ds::IndexedMaxHeap;
    ///
    /// let heap: IndexedMaxHeap<u64> = IndexedMaxHeap::with_capacity(128);
    /// assert!(heap.capacity() >= 128);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_observer(capacity, NoopObserver)
    }

    /// Builds a heap from `values` with bottom-up heapify in O(n).
    ///
    /// ```
    /// use heapkit::ds::IndexedMaxHeap;
    ///
    /// let heap = IndexedMaxHeap::from_vec(vec![4, 10, 3, 5, 1]);
    /// assert_eq!(heap.peek(), Ok(&10));
    /// assert_eq!(heap.into_sorted_vec(), vec![1, 3, 4, 5, 10]);
    /// ```
    pub fn from_vec(values: Vec<T>) -> Self {
        Self::from_vec_with_observer(values, NoopObserver)
    }
}

impl<T, O> IndexedMaxHeap<T, O>
where
    T: Ord,
    O: HeapObserver<T>,
{
    /// Creates an empty heap that reports moves to `observer`.
    pub fn with_observer(observer: O) -> Self {
        Self {
            data: GrowableArray::new(),
            observer,
            #[cfg(feature = "metrics")]
            metrics: HeapMetrics::default(),
        }
    }

    pub fn with_capacity_and_observer(capacity: usize, observer: O) -> Self {
        Self {
            data: GrowableArray::with_capacity(capacity),
            observer,
            #[cfg(feature = "metrics")]
            metrics: HeapMetrics::default(),
        }
    }

    /// Heapifies `values` and announces every final placement to `observer`.
    pub fn from_vec_with_observer(values: Vec<T>, observer: O) -> Self {
        let mut heap = Self {
            data: GrowableArray::from(values),
            observer,
            #[cfg(feature = "metrics")]
            metrics: HeapMetrics::default(),
        };
        let items = heap.data.as_mut_slice();
        for i in (1..=items.len() / 2).rev() {
            sift_down(items, i, |_, _, _| {});
        }
        for (pos, value) in heap.data.iter().enumerate() {
            heap.observer.on_move(value, None, HeapIndex(pos + 1));
        }
        heap
    }

    /// Inserts `value` and returns the handle where it came to rest.
    ///
    /// The value is appended as a new leaf and bubbled toward the root while
    /// its parent is strictly smaller.
    pub fn push(&mut self, value: T) -> HeapIndex {
        #[cfg(feature = "metrics")]
        let grow_before = self.data.grow_count();

        let leaf = self.data.push(value) + 1;
        let Self { data, observer, .. } = self;
        let (rest, _steps) = sift_up(data.as_mut_slice(), leaf, |v, from, to| {
            observer.on_move(v, Some(HeapIndex(from)), HeapIndex(to))
        });
        let rest = HeapIndex(rest);
        self.observer.on_move(&self.data.as_slice()[rest.0 - 1], None, rest);

        #[cfg(feature = "metrics")]
        {
            self.metrics.record_push_call();
            self.metrics.record_sift_up_steps(_steps);
            if self.data.grow_count() > grow_before {
                self.metrics.record_grow();
            }
        }
        rest
    }

    /// Returns the maximum without removing it.
    pub fn peek(&self) -> Result<&T, HeapError> {
        #[cfg(feature = "metrics")]
        self.metrics.record_peek_call();

        let top = self.data.as_slice().first().ok_or(HeapError::Underflow);

        #[cfg(feature = "metrics")]
        if top.is_err() {
            self.metrics.record_peek_empty();
        }
        top
    }

    /// Removes and returns the maximum.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        #[cfg(feature = "metrics")]
        self.metrics.record_pop_call();

        if self.data.is_empty() {
            #[cfg(feature = "metrics")]
            self.metrics.record_pop_empty();
            return Err(HeapError::Underflow);
        }
        self.take_at(1)
    }

    /// Removes and returns the value at handle `idx`.
    ///
    /// The last leaf is swapped into the vacated slot and repaired toward the
    /// root or the leaves depending on how it compares with the removed
    /// value. Removing the last leaf itself moves nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::IndexedMaxHeap;
    ///
    /// let mut heap: IndexedMaxHeap<i32> = (0..10).collect();
    /// let (idx, _) = heap.iter().find(|(_, v)| **v == 4).unwrap();
    ///
    /// assert_eq!(heap.remove_at(idx), Ok(4));
    /// assert_eq!(heap.len(), 9);
    /// assert!(heap.iter().all(|(_, v)| *v != 4));
    /// ```
    pub fn remove_at(&mut self, idx: HeapIndex) -> Result<T, HeapError> {
        #[cfg(feature = "metrics")]
        self.metrics.record_remove_at_call();

        let i = self.live(idx)?;
        #[cfg(feature = "metrics")]
        if i == self.data.len() {
            self.metrics.record_remove_last_shortcut();
        }
        self.take_at(i)
    }

    /// Replaces the value at handle `idx` and returns its new handle.
    ///
    /// A strictly greater value only moves toward the root, a strictly
    /// smaller one only toward the leaves; an equal value stays put. The
    /// observer sees the replaced value removed from `idx` and the new one
    /// placed at its resting handle.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::IndexedMaxHeap;
    ///
    /// let mut heap = IndexedMaxHeap::new();
    /// heap.push(50);
    /// let low = heap.push(10);
    ///
    /// let raised = heap.update_priority(low, 99).unwrap();
    /// assert!(raised.is_root());
    /// assert_eq!(heap.peek(), Ok(&99));
    /// ```
    pub fn update_priority(&mut self, idx: HeapIndex, value: T) -> Result<HeapIndex, HeapError> {
        #[cfg(feature = "metrics")]
        self.metrics.record_update_call();

        let i = self.live(idx)?;
        let previous = self.data.set(i - 1, value)?;
        let direction = self.data.as_slice()[i - 1].cmp(&previous);
        self.observer.on_remove(&previous, idx);
        drop(previous);

        let rest = match direction {
            Ordering::Greater => self.repair_up(i),
            Ordering::Less => self.repair_down(i),
            Ordering::Equal => {
                #[cfg(feature = "metrics")]
                self.metrics.record_update_unchanged();
                i
            },
        };
        let rest = HeapIndex(rest);
        self.observer
            .on_move(&self.data.as_slice()[rest.0 - 1], Some(idx), rest);
        Ok(rest)
    }

    /// Returns the value at handle `idx`, if live.
    pub fn get(&self, idx: HeapIndex) -> Option<&T> {
        self.data.get(idx.0.checked_sub(1)?).ok()
    }

    /// Number of live values.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Capacity of the backing array.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Removes every value, reporting each removal to the observer.
    pub fn clear(&mut self) {
        for (pos, value) in self.data.iter().enumerate() {
            self.observer.on_remove(value, HeapIndex(pos + 1));
        }
        self.data.clear();
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();
    }

    /// Iterates over `(handle, value)` pairs in backing (level) order.
    pub fn iter(&self) -> impl Iterator<Item = (HeapIndex, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(pos, value)| (HeapIndex(pos + 1), value))
    }

    /// Consumes the heap and returns its values in ascending order.
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut items = self.data.into_vec();
        for end in (2..=items.len()).rev() {
            items.swap(0, end - 1);
            sift_down(&mut items[..end - 1], 1, |_, _, _| {});
        }
        items
    }

    /// Consumes the heap and returns its values in backing order.
    pub fn into_vec(self) -> Vec<T> {
        self.data.into_vec()
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Mutable access to the observer. Editing a locator through this can
    /// desynchronize it from the heap.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Returns an approximate memory footprint in bytes.
    pub fn approx_bytes(&self) -> usize {
        std::mem::size_of::<Self>() + self.data.capacity() * std::mem::size_of::<T>()
    }

    /// Validates the max-heap property at every internal node (debug/test
    /// builds only). Never repairs anything.
    #[cfg(any(test, debug_assertions))]
    pub fn check_invariants(&self) -> Result<(), InvariantError>
    where
        T: fmt::Debug,
    {
        let items = self.data.as_slice();
        for child in 2..=items.len() {
            let parent = child / 2;
            if items[parent - 1] < items[child - 1] {
                let err = InvariantError::new(format!(
                    "heap order violated: parent #{} ({:?}) < child #{} ({:?})",
                    parent,
                    items[parent - 1],
                    child,
                    items[child - 1]
                ));
                log::debug!("{}", err);
                return Err(err);
            }
        }
        Ok(())
    }

    fn live(&self, idx: HeapIndex) -> Result<usize, HeapError> {
        let len = self.data.len();
        if idx.0 == 0 || idx.0 > len {
            #[cfg(feature = "metrics")]
            self.metrics.record_out_of_range();
            return Err(HeapError::OutOfRange { index: idx.0, len });
        }
        Ok(idx.0)
    }

    /// Swap-with-last removal of live handle `i`.
    fn take_at(&mut self, i: usize) -> Result<T, HeapError> {
        let last = self.data.len();
        if i == last {
            let removed = self.data.pop()?;
            self.observer.on_remove(&removed, HeapIndex(i));
            return Ok(removed);
        }

        self.data.swap(i - 1, last - 1)?;
        let removed = self.data.pop()?;
        self.observer.on_remove(&removed, HeapIndex(i));

        let rest = match self.data.as_slice()[i - 1].cmp(&removed) {
            Ordering::Greater => self.repair_up(i),
            Ordering::Less => self.repair_down(i),
            Ordering::Equal => i,
        };
        let rest = HeapIndex(rest);
        self.observer.on_move(
            &self.data.as_slice()[rest.0 - 1],
            Some(HeapIndex(last)),
            rest,
        );
        Ok(removed)
    }

    fn repair_up(&mut self, i: usize) -> usize {
        let Self { data, observer, .. } = self;
        let (rest, _steps) = sift_up(data.as_mut_slice(), i, |v, from, to| {
            observer.on_move(v, Some(HeapIndex(from)), HeapIndex(to))
        });
        #[cfg(feature = "metrics")]
        self.metrics.record_sift_up_steps(_steps);
        rest
    }

    fn repair_down(&mut self, i: usize) -> usize {
        let Self { data, observer, .. } = self;
        let (rest, _steps) = sift_down(data.as_mut_slice(), i, |v, from, to| {
            observer.on_move(v, Some(HeapIndex(from)), HeapIndex(to))
        });
        #[cfg(feature = "metrics")]
        self.metrics.record_sift_down_steps(_steps);
        rest
    }
}

/// Locator-backed convenience: address values by key instead of handle.
impl<T, K, F> IndexedMaxHeap<T, KeyedLocator<K, F>>
where
    T: Ord,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    /// Returns the current handle of the value keyed by `key`.
    pub fn index_of_key(&self, key: &K) -> Option<HeapIndex> {
        self.observer.index_of(key)
    }

    pub fn get_key(&self, key: &K) -> Option<&T> {
        self.get(self.index_of_key(key)?)
    }

    /// Removes the value keyed by `key`, wherever it currently sits.
    pub fn remove_key(&mut self, key: &K) -> Option<T> {
        let idx = self.index_of_key(key)?;
        self.remove_at(idx).ok()
    }

    /// Replaces the value keyed by `key` and returns its new handle.
    ///
    /// If `value` projects to a different key, `key` is forgotten and the
    /// new key takes over.
    pub fn update_key(&mut self, key: &K, value: T) -> Option<HeapIndex> {
        let idx = self.index_of_key(key)?;
        self.update_priority(idx, value).ok()
    }
}

/// Bubbles the value at 1-based `i` toward the root while its parent is
/// strictly smaller. `displaced(value, from, to)` is called for every parent
/// moved down. Returns the final handle and the number of swaps.
fn sift_up<T: Ord>(
    items: &mut [T],
    mut i: usize,
    mut displaced: impl FnMut(&T, usize, usize),
) -> (usize, u64) {
    let mut steps = 0;
    while i > 1 {
        let parent = i / 2;
        if items[parent - 1] >= items[i - 1] {
            break;
        }
        items.swap(parent - 1, i - 1);
        displaced(&items[i - 1], parent, i);
        i = parent;
        steps += 1;
    }
    (i, steps)
}

/// Sinks the value at 1-based `i` below any strictly greater child. The left
/// child wins ties. `displaced(value, from, to)` is called for every child
/// moved up. Returns the final handle and the number of swaps.
fn sift_down<T: Ord>(
    items: &mut [T],
    mut i: usize,
    mut displaced: impl FnMut(&T, usize, usize),
) -> (usize, u64) {
    let len = items.len();
    let mut steps = 0;
    loop {
        let left = 2 * i;
        if left > len {
            break;
        }
        let right = left + 1;
        let mut child = left;
        if right <= len && items[right - 1] > items[left - 1] {
            child = right;
        }
        if items[child - 1] <= items[i - 1] {
            break;
        }
        items.swap(child - 1, i - 1);
        displaced(&items[i - 1], child, i);
        i = child;
        steps += 1;
    }
    (i, steps)
}

impl<T: Ord> Default for IndexedMaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for IndexedMaxHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T, O> Extend<T> for IndexedMaxHeap<T, O>
where
    T: Ord,
    O: HeapObserver<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for value in iter {
            self.push(value);
        }
    }
}

impl<T, O> Clone for IndexedMaxHeap<T, O>
where
    T: Clone,
    O: Clone,
{
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            observer: self.observer.clone(),
            #[cfg(feature = "metrics")]
            metrics: HeapMetrics::default(),
        }
    }
}

impl<T, O> fmt::Debug for IndexedMaxHeap<T, O>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedMaxHeap")
            .field("len", &self.data.len())
            .field("capacity", &self.data.capacity())
            .field("data", &self.data.as_slice())
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "metrics")]
impl<T, O> IndexedMaxHeap<T, O> {
    /// Returns a point-in-time copy of the operation counters.
    pub fn metrics_snapshot(&self) -> HeapMetricsSnapshot {
        self.metrics
            .snapshot(self.data.len(), self.data.capacity())
    }
}

#[cfg(feature = "metrics")]
impl<T, O> MetricsSnapshotProvider<HeapMetricsSnapshot> for IndexedMaxHeap<T, O> {
    fn snapshot(&self) -> HeapMetricsSnapshot {
        self.metrics_snapshot()
    }
}

#[cfg(feature = "metrics")]
impl<T, O> MetricsReset for IndexedMaxHeap<T, O> {
    fn reset_metrics(&mut self) {
        self.metrics = HeapMetrics::default();
    }
}

// ---------------------------------------------------------------------------
// ConcurrentIndexedMaxHeap
// ---------------------------------------------------------------------------

/// Thread-safe wrapper running each logical operation under one lock.
///
/// Reads (`peek_with`, `get_with`, `len`) take the read lock; everything that
/// can move a value takes the write lock. Compound sequences that must not
/// interleave with other writers go through [`with_write`](Self::with_write).
///
/// # Example
///
/// ```
/// # #[cfg(feature = "concurrency")]
/// # {
/// use std::sync::Arc;
/// use std::thread;
/// use heapkit::ds::ConcurrentIndexedMaxHeap;
///
/// let heap = Arc::new(ConcurrentIndexedMaxHeap::new());
/// let workers: Vec<_> = (0..4u32)
///     .map(|t| {
///         let heap = Arc::clone(&heap);
///         thread::spawn(move || {
///             for i in 0..100 {
///                 heap.push(t * 100 + i);
///             }
///         })
///     })
///     .collect();
/// for w in workers {
///     w.join().unwrap();
/// }
/// assert_eq!(heap.len(), 400);
/// assert_eq!(heap.pop(), Ok(399));
/// # }
/// ```
#[cfg(feature = "concurrency")]
pub struct ConcurrentIndexedMaxHeap<T> {
    inner: parking_lot::RwLock<IndexedMaxHeap<T>>,
}

#[cfg(feature = "concurrency")]
impl<T: Ord> ConcurrentIndexedMaxHeap<T> {
    pub fn new() -> Self {
        Self {
            inner: parking_lot::RwLock::new(IndexedMaxHeap::new()),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: parking_lot::RwLock::new(IndexedMaxHeap::with_capacity(capacity)),
        }
    }

    pub fn push(&self, value: T) -> HeapIndex {
        let mut heap = self.inner.write();
        heap.push(value)
    }

    pub fn pop(&self) -> Result<T, HeapError> {
        let mut heap = self.inner.write();
        heap.pop()
    }

    pub fn peek_with<R>(&self, f: impl FnOnce(&T) -> R) -> Result<R, HeapError> {
        let heap = self.inner.read();
        heap.peek().map(f)
    }

    pub fn get_with<R>(&self, idx: HeapIndex, f: impl FnOnce(&T) -> R) -> Option<R> {
        let heap = self.inner.read();
        heap.get(idx).map(f)
    }

    pub fn remove_at(&self, idx: HeapIndex) -> Result<T, HeapError> {
        let mut heap = self.inner.write();
        heap.remove_at(idx)
    }

    pub fn update_priority(&self, idx: HeapIndex, value: T) -> Result<HeapIndex, HeapError> {
        let mut heap = self.inner.write();
        heap.update_priority(idx, value)
    }

    /// Runs `f` with exclusive access to the inner heap.
    pub fn with_write<R>(&self, f: impl FnOnce(&mut IndexedMaxHeap<T>) -> R) -> R {
        let mut heap = self.inner.write();
        f(&mut heap)
    }

    pub fn len(&self) -> usize {
        let heap = self.inner.read();
        heap.len()
    }

    pub fn is_empty(&self) -> bool {
        let heap = self.inner.read();
        heap.is_empty()
    }

    pub fn capacity(&self) -> usize {
        let heap = self.inner.read();
        heap.capacity()
    }

    pub fn clear(&self) {
        let mut heap = self.inner.write();
        heap.clear();
    }

    pub fn into_inner(self) -> IndexedMaxHeap<T> {
        self.inner.into_inner()
    }
}

#[cfg(feature = "concurrency")]
impl<T: Ord> Default for ConcurrentIndexedMaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "concurrency")]
impl<T: fmt::Debug> fmt::Debug for ConcurrentIndexedMaxHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConcurrentIndexedMaxHeap")
            .field("inner", &*self.inner.read())
            .finish()
    }
}
