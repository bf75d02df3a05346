//! Insertion Order Module
//!
//! Tracks the order in which keys were written, for FIFO eviction.

use std::collections::VecDeque;

// == Insertion Order ==
/// Write-ordered queue of `(key, seq)` slots.
///
/// Keys are stored in a VecDeque where:
/// - Front = Oldest write
/// - Back = Newest write
///
/// Overwriting a key pushes a fresh slot instead of moving the old one, so
/// the queue may hold stale slots. A slot is live only while its `seq`
/// matches the entry currently stored under that key; the owning store
/// decides that and skips stale slots when evicting.
#[derive(Debug, Default)]
pub struct InsertionOrder {
    /// Slots ordered by write time
    slots: VecDeque<(String, u64)>,
}

impl InsertionOrder {
    // == Constructor ==
    /// Creates a new empty tracker.
    pub fn new() -> Self {
        Self {
            slots: VecDeque::new(),
        }
    }

    // == Push ==
    /// Records a write of `key` with sequence number `seq`.
    pub fn push(&mut self, key: &str, seq: u64) {
        self.slots.push_back((key.to_string(), seq));
    }

    // == Pop Oldest ==
    /// Removes and returns the oldest slot, live or stale.
    pub fn pop_oldest(&mut self) -> Option<(String, u64)> {
        self.slots.pop_front()
    }

    // == Peek Oldest ==
    /// Returns the oldest slot without removing it.
    pub fn peek_oldest(&self) -> Option<(&str, u64)> {
        self.slots.front().map(|(key, seq)| (key.as_str(), *seq))
    }

    // == Retain ==
    /// Drops every slot for which `keep` returns false.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str, u64) -> bool,
    {
        self.slots.retain(|(key, seq)| keep(key, *seq));
    }

    // == Length ==
    /// Returns the number of slots, including stale ones.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_new() {
        let order = InsertionOrder::new();
        assert!(order.is_empty());
        assert_eq!(order.len(), 0);
    }

    #[test]
    fn test_push_keeps_write_order() {
        let mut order = InsertionOrder::new();

        order.push("key1", 0);
        order.push("key2", 1);
        order.push("key3", 2);

        assert_eq!(order.len(), 3);
        assert_eq!(order.peek_oldest(), Some(("key1", 0)));
    }

    #[test]
    fn test_pop_oldest() {
        let mut order = InsertionOrder::new();

        order.push("key1", 0);
        order.push("key2", 1);

        assert_eq!(order.pop_oldest(), Some(("key1".to_string(), 0)));
        assert_eq!(order.pop_oldest(), Some(("key2".to_string(), 1)));
        assert_eq!(order.pop_oldest(), None);
    }

    #[test]
    fn test_rewrite_adds_new_slot() {
        let mut order = InsertionOrder::new();

        order.push("a", 0);
        order.push("b", 1);
        order.push("a", 2);

        // The first slot for "a" is still at the front; the store treats it
        // as stale because the live entry now carries seq 2
        assert_eq!(order.len(), 3);
        assert_eq!(order.peek_oldest(), Some(("a", 0)));
    }

    #[test]
    fn test_retain_drops_stale_slots() {
        let mut order = InsertionOrder::new();

        order.push("a", 0);
        order.push("b", 1);
        order.push("a", 2);

        order.retain(|key, seq| !(key == "a" && seq == 0));

        assert_eq!(order.len(), 2);
        assert_eq!(order.pop_oldest(), Some(("b".to_string(), 1)));
        assert_eq!(order.pop_oldest(), Some(("a".to_string(), 2)));
    }
}
