//! Growable array with an explicit logical length and doubling growth.
//!
//! The backing store of [`IndexedMaxHeap`](crate::ds::IndexedMaxHeap). Live
//! values occupy positions `[0, len)`; the physical capacity may exceed the
//! logical length so that appends are amortized O(1).
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     GrowableArray<T> Layout                         │
//! │                                                                     │
//! │   Position:   0     1     2     3     4     5     6     7           │
//! │             ┌─────┬─────┬─────┬─────┬─────┬─────┬─────┬─────┐       │
//! │   items:    │  a  │  b  │  c  │  d  │  e  │  ·  │  ·  │  ·  │       │
//! │             └─────┴─────┴─────┴─────┴─────┴─────┴─────┴─────┘       │
//! │              ◄────────── len = 5 ──────────►                        │
//! │              ◄────────────────── capacity = 8 ──────────────►       │
//! │                                                                     │
//! │   push(f) when len < capacity:  write at position 5, len = 6        │
//! │   push(x) when len == capacity: capacity 8 → 16, then write         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unused positions hold no values at all, so `T` carries no sentinel or
//! default requirement.
//!
//! ## Operations
//!
//! | Operation   | Description                          | Complexity     |
//! |-------------|--------------------------------------|----------------|
//! | `push`      | Append, doubling capacity when full  | Amortized O(1) |
//! | `pop`       | Remove the last element              | O(1)           |
//! | `get`/`set` | Bounds-checked access                | O(1)           |
//! | `swap`      | Bounds-checked exchange              | O(1)           |
//!
//! ## Example Usage
//!
//! ```
//! use heapkit::ds::GrowableArray;
//! use heapkit::error::HeapError;
//!
//! let mut array = GrowableArray::new();
//! assert_eq!(array.push("a"), 0);
//! assert_eq!(array.push("b"), 1);
//!
//! assert_eq!(array.get(1), Ok(&"b"));
//! assert_eq!(array.set(0, "z"), Ok("a"));
//! assert_eq!(array.get(2), Err(HeapError::OutOfRange { index: 2, len: 2 }));
//!
//! assert_eq!(array.pop(), Ok("b"));
//! assert_eq!(array.pop(), Ok("z"));
//! assert_eq!(array.pop(), Err(HeapError::Underflow));
//! ```

use crate::error::HeapError;

/// Capacity used for the first allocation when none was requested.
pub const DEFAULT_INITIAL_CAPACITY: usize = 4;

/// Contiguous, zero-indexed sequence with explicit length and doubling growth.
#[derive(Debug, Clone)]
pub struct GrowableArray<T> {
    items: Vec<T>,
    initial_capacity: usize,
    grow_count: u64,
}

impl<T> GrowableArray<T> {
    /// Creates an empty array. No memory is allocated until the first push.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            grow_count: 0,
        }
    }

    /// Creates an empty array with room for `capacity` values.
    ///
    /// ```
    /// use heapkit::ds::GrowableArray;
    ///
    /// let array: GrowableArray<u8> = GrowableArray::with_capacity(16);
    /// assert!(array.capacity() >= 16);
    /// assert!(array.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            initial_capacity: capacity.max(1),
            grow_count: 0,
        }
    }

    /// Appends `value` and returns the position it was stored at.
    ///
    /// Doubles the capacity first when the array is full.
    pub fn push(&mut self, value: T) -> usize {
        if self.items.len() == self.items.capacity() {
            self.grow();
        }
        let index = self.items.len();
        self.items.push(value);
        index
    }

    /// Removes and returns the last value.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        self.items.pop().ok_or(HeapError::Underflow)
    }

    /// Returns a reference to the value at `index`.
    pub fn get(&self, index: usize) -> Result<&T, HeapError> {
        self.items.get(index).ok_or(HeapError::OutOfRange {
            index,
            len: self.items.len(),
        })
    }

    /// Returns a mutable reference to the value at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, HeapError> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(HeapError::OutOfRange { index, len })
    }

    /// Overwrites the value at `index`, returning the previous value.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, HeapError> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, value))
    }

    /// Exchanges the values at positions `a` and `b`.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), HeapError> {
        let len = self.items.len();
        for index in [a, b] {
            if index >= len {
                return Err(HeapError::OutOfRange { index, len });
            }
        }
        self.items.swap(a, b);
        Ok(())
    }

    /// Returns the logical length.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the physical capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Returns how many times the array has doubled its capacity.
    #[inline]
    pub fn grow_count(&self) -> u64 {
        self.grow_count
    }

    /// Reserves room for at least `additional` more values.
    pub fn reserve(&mut self, additional: usize) {
        self.items.reserve(additional);
    }

    /// Drops every value, keeping the allocation.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Consumes the array, returning the live values in position order.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    fn grow(&mut self) {
        let old = self.items.capacity();
        let target = if old == 0 {
            self.initial_capacity
        } else {
            old.saturating_mul(2)
        };
        self.items.reserve_exact(target - self.items.len());
        self.grow_count += 1;
        log::trace!(
            "growable array grew from {} to {} slots",
            old,
            self.items.capacity()
        );
    }
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for GrowableArray<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            initial_capacity: items.capacity().max(DEFAULT_INITIAL_CAPACITY),
            items,
            grow_count: 0,
        }
    }
}

impl<T> FromIterator<T> for GrowableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        for value in iter {
            array.push(value);
        }
        array
    }
}

impl<'a, T> IntoIterator for &'a GrowableArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
