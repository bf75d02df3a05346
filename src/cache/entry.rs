//! Expiring Entry Module
//!
//! Defines the structure for individual store entries with TTL support.

use std::time::{Duration, Instant};

// == Expiring Entry ==
/// A single stored value together with the moment it was written.
///
/// Lifetime is measured from insertion, never from last access.
#[derive(Debug, Clone)]
pub struct ExpiringEntry<V> {
    /// The stored value
    pub value: V,
    /// When the value was (last) written
    pub inserted_at: Instant,
    /// Insertion sequence number, used to match queue slots to live entries
    pub seq: u64,
}

impl<V> ExpiringEntry<V> {
    // == Constructor ==
    /// Creates an entry stamped with the current instant.
    pub fn new(value: V, seq: u64) -> Self {
        Self {
            value,
            inserted_at: Instant::now(),
            seq,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has outlived `ttl`.
    ///
    /// Boundary condition: an entry is visible only while
    /// `now - inserted_at < ttl`, so it is expired as soon as the full TTL
    /// has elapsed.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.inserted_at.elapsed() >= ttl
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_entry_creation() {
        let entry = ExpiringEntry::new("test_value".to_string(), 7);

        assert_eq!(entry.value, "test_value");
        assert_eq!(entry.seq, 7);
        assert!(!entry.is_expired(Duration::from_secs(60)));
    }

    #[test]
    fn test_entry_expiration() {
        let entry = ExpiringEntry::new(1u64, 0);
        let ttl = Duration::from_secs(1);

        assert!(!entry.is_expired(ttl));

        sleep(Duration::from_millis(1100));

        assert!(entry.is_expired(ttl));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        // A zero TTL means the entry is never visible
        let entry = ExpiringEntry::new("test", 0);
        assert!(entry.is_expired(Duration::ZERO), "Entry should be expired at boundary");
    }
}
