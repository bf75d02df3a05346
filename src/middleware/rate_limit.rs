//! Request Rate Limiter
//!
//! Per-client request counter built on the expiring store.

use std::time::Duration;

use tracing::debug;

use crate::cache::{CacheStats, ExpiringStore};

/// Maximum number of distinct clients tracked at once.
pub const MAX_TRACKED_CLIENTS: usize = 10_000;

// == Rate Limiter ==
/// Fixed-quota limiter keyed by client identifier.
///
/// A client's counter lives for `time_window` from its last accepted request.
/// Once it expires the next request starts a fresh count.
///
/// `check` is a read followed by a write with no lock held in between, so
/// two simultaneous requests from one client can both pass at the limit
/// boundary. The cap is approximate under that kind of concurrency.
#[derive(Debug)]
pub struct RateLimiter {
    counters: ExpiringStore<u32>,
    max_requests: u32,
    time_window: Duration,
}

impl RateLimiter {
    // == Constructor ==
    pub fn new(max_requests: u32, time_window: Duration) -> Self {
        Self::with_capacity(max_requests, time_window, MAX_TRACKED_CLIENTS)
    }

    pub fn with_capacity(max_requests: u32, time_window: Duration, max_clients: usize) -> Self {
        Self {
            counters: ExpiringStore::new(max_clients, time_window),
            max_requests,
            time_window,
        }
    }

    // == Check ==
    /// Returns `true` and counts the request if `client_id` is under quota.
    ///
    /// A rejected request leaves the counter untouched.
    pub fn check(&self, client_id: &str) -> bool {
        let count = self.counters.get(client_id).unwrap_or(0);

        if count >= self.max_requests {
            debug!(client = client_id, count, "Rate limit reached");
            return false;
        }

        self.counters.set(client_id, count + 1);
        true
    }

    pub fn max_requests(&self) -> u32 {
        self.max_requests
    }

    pub fn time_window(&self) -> Duration {
        self.time_window
    }

    pub fn stats(&self) -> CacheStats {
        self.counters.stats()
    }
}
