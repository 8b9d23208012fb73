//! Bounded history queue: fixed-capacity FIFO with newest-first access.
//!
//! Generic reusable container, not ring-specific: pushing at capacity
//! evicts the oldest entry. Used by the pointer-motion tracker to turn
//! short-term deltas into a longer-term direction signal.

use std::collections::VecDeque;

/// Fixed-capacity FIFO; newest entries at the front, oldest at the back.
#[derive(Clone, Debug)]
pub struct BoundedHistoryQueue<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedHistoryQueue<T> {
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "queue capacity must be at least 1");
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Insert at the front, silently discarding the oldest entry at capacity.
    pub fn push(&mut self, value: T) {
        let _ = self.push_return(value);
    }

    /// Insert at the front; returns the evicted oldest entry, if any.
    pub fn push_return(&mut self, value: T) -> Option<T> {
        let evicted = if self.is_full() {
            self.items.pop_back()
        } else {
            None
        };
        self.items.push_front(value);
        evicted
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Newest entry.
    #[inline]
    pub fn peek_front(&self) -> Option<&T> {
        self.items.front()
    }

    /// Oldest entry.
    #[inline]
    pub fn peek_back(&self) -> Option<&T> {
        self.items.back()
    }

    /// Entry at `index`, counted from the newest (0 = front).
    #[inline]
    pub fn peek(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Snapshot iteration, newest first; does not drain the queue.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
