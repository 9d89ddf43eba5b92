//! Bounded deque for the explorer's event log
//!
//! A fixed-capacity deque that evicts the oldest item once full.

use std::collections::VecDeque;

/// A bounded deque with FIFO eviction policy
#[derive(Clone, Debug)]
pub struct BoundedDeque<T> {
    cap: usize,
    buf: VecDeque<T>,
}

impl<T> BoundedDeque<T> {
    /// Create a deque holding at most `cap` items. A zero capacity drops every push.
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            buf: VecDeque::with_capacity(cap.min(1024)),
        }
    }

    /// Push a new value, evicting the oldest if at capacity
    pub fn push(&mut self, value: T) {
        if self.cap == 0 {
            return;
        }
        if self.buf.len() == self.cap {
            self.buf.pop_front();
        }
        self.buf.push_back(value);
    }

    /// Oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Most recent item
    pub fn last(&self) -> Option<&T> {
        self.buf.back()
    }
}

impl<T> Default for BoundedDeque<T> {
    fn default() -> Self {
        Self::new(crate::constants::EVENT_LOG_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_deque_eviction() {
        let mut deque = BoundedDeque::new(3);
        for value in 1..=4 {
            deque.push(value);
        }
        assert_eq!(deque.len(), 3);
        assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
        assert_eq!(deque.last(), Some(&4));
    }

    #[test]
    fn test_bounded_deque_zero_capacity() {
        let mut deque = BoundedDeque::new(0);
        deque.push(1);
        assert!(deque.is_empty());
        assert_eq!(deque.capacity(), 0);
    }
}
