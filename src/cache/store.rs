//! Expiring Store Module
//!
//! Bounded key-value store combining HashMap storage with insertion-order
//! eviction and lazy TTL expiration.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::cache::{CacheStats, ExpiringEntry, InsertionOrder};

/// Stale queue slots are compacted once they outnumber live entries by this factor.
const ORDER_COMPACT_FACTOR: usize = 2;
/// Lower bound on the queue length before compaction is considered.
const ORDER_COMPACT_MIN: usize = 64;

// == Expiring Store ==
/// Thread-safe, bounded, time-expiring key-value store.
///
/// Every entry lives for the store-wide `ttl` measured from its last write.
/// Reads never extend a lifetime and never change eviction order. When a new
/// key arrives at capacity, expired entries at the head of the queue are
/// purged first and then, if still full, the oldest written entry is evicted.
///
/// All operations are synchronous; the internal mutex is held only for the
/// duration of a single `get` or `set`.
#[derive(Debug)]
pub struct ExpiringStore<V> {
    inner: Mutex<StoreInner<V>>,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// Lifetime of every entry
    ttl: Duration,
}

#[derive(Debug)]
struct StoreInner<V> {
    entries: HashMap<String, ExpiringEntry<V>>,
    order: InsertionOrder,
    stats: CacheStats,
    next_seq: u64,
}

impl<V: Clone> ExpiringStore<V> {
    // == Constructor ==
    /// Creates a new store with the given capacity and entry lifetime.
    ///
    /// A capacity of zero is treated as one.
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                entries: HashMap::new(),
                order: InsertionOrder::new(),
                stats: CacheStats::new(),
                next_seq: 0,
            }),
            max_entries: max_entries.max(1),
            ttl,
        }
    }

    // == Set ==
    /// Inserts or overwrites `key`, restarting its lifetime.
    ///
    /// Inserting a new key into a full store makes room first, so the
    /// store never holds more than `max_entries` entries.
    pub fn set(&self, key: impl Into<String>, value: V) {
        let key = key.into();
        let mut guard = self.lock();
        let inner = &mut *guard;

        if !inner.entries.contains_key(&key) && inner.entries.len() >= self.max_entries {
            inner.purge_expired_head(self.ttl);
            if inner.entries.len() >= self.max_entries {
                inner.evict_oldest();
            }
        }

        let seq = inner.next_seq;
        inner.next_seq += 1;

        inner.order.push(&key, seq);
        inner.entries.insert(key, ExpiringEntry::new(value, seq));
        inner.compact_order();
        inner.stats.set_total_entries(inner.entries.len());
    }

    // == Get ==
    /// Returns a clone of the value for `key` if present and not expired.
    ///
    /// An expired entry is removed on the spot and reported as absent.
    pub fn get(&self, key: &str) -> Option<V> {
        let mut guard = self.lock();
        let inner = &mut *guard;

        let lookup = inner
            .entries
            .get(key)
            .map(|entry| (!entry.is_expired(self.ttl)).then(|| entry.value.clone()));

        match lookup {
            Some(Some(value)) => {
                inner.stats.record_hit();
                Some(value)
            }
            Some(None) => {
                inner.entries.remove(key);
                inner.stats.record_expiration();
                inner.stats.record_miss();
                inner.stats.set_total_entries(inner.entries.len());
                None
            }
            None => {
                inner.stats.record_miss();
                None
            }
        }
    }

    // == Stats ==
    /// Returns a snapshot of the store statistics.
    pub fn stats(&self) -> CacheStats {
        let guard = self.lock();
        let mut stats = guard.stats.clone();
        stats.set_total_entries(guard.entries.len());
        stats
    }

    // == Length ==
    /// Returns the number of entries held, including expired ones not yet purged.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner<V>> {
        // The map is left consistent between statements, so a poisoned lock is still usable
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<V> StoreInner<V> {
    fn is_live(&self, key: &str, seq: u64) -> bool {
        self.entries.get(key).is_some_and(|entry| entry.seq == seq)
    }

    // == Purge Expired Head ==
    /// Drops stale slots and expired entries from the front of the queue.
    ///
    /// All entries share one TTL, so live entries expire in queue order and
    /// the scan can stop at the first live, unexpired one.
    fn purge_expired_head(&mut self, ttl: Duration) {
        while let Some((key, seq)) = self.order.peek_oldest() {
            let expired = match self.entries.get(key) {
                Some(entry) if entry.seq == seq => entry.is_expired(ttl),
                _ => true,
            };
            if !expired {
                break;
            }
            if let Some((key, seq)) = self.order.pop_oldest() {
                if self.is_live(&key, seq) {
                    self.entries.remove(&key);
                    self.stats.record_expiration();
                }
            }
        }
    }

    // == Evict Oldest ==
    /// Removes the oldest live entry, skipping stale slots.
    fn evict_oldest(&mut self) -> Option<String> {
        while let Some((key, seq)) = self.order.pop_oldest() {
            if self.is_live(&key, seq) {
                self.entries.remove(&key);
                self.stats.record_eviction();
                return Some(key);
            }
        }
        None
    }

    fn compact_order(&mut self) {
        let threshold = (self.entries.len() * ORDER_COMPACT_FACTOR).max(ORDER_COMPACT_MIN);
        if self.order.len() > threshold {
            let entries = &self.entries;
            self.order
                .retain(|key, seq| entries.get(key).is_some_and(|entry| entry.seq == seq));
        }
    }
}
