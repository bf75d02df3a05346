//! Response Cache
//!
//! Path+query keyed cache of response bodies built on the expiring store.

use std::time::Duration;

use axum::body::Bytes;
use axum::http::Uri;

use crate::cache::{CacheStats, ExpiringStore};

/// Largest response body the cache will hold.
pub const MAX_CACHED_BODY_BYTES: usize = 1024 * 1024; // 1 MB

// == Response Cache ==
/// Stores serialized response bodies for `ttl` after they were produced.
///
/// The cache has no opinion on what is cacheable; the request pipeline only
/// looks up GET requests and only stores complete 200 bodies.
#[derive(Debug)]
pub struct ResponseCache {
    bodies: ExpiringStore<Bytes>,
}

impl ResponseCache {
    // == Constructor ==
    pub fn new(max_size: usize, ttl: Duration) -> Self {
        Self {
            bodies: ExpiringStore::new(max_size, ttl),
        }
    }

    // == Lookup ==
    pub fn lookup(&self, cache_key: &str) -> Option<Bytes> {
        self.bodies.get(cache_key)
    }

    // == Store ==
    pub fn store(&self, cache_key: impl Into<String>, body: Bytes) {
        self.bodies.set(cache_key, body);
    }

    pub fn stats(&self) -> CacheStats {
        self.bodies.stats()
    }

    pub fn max_size(&self) -> usize {
        self.bodies.max_entries()
    }

    pub fn ttl(&self) -> Duration {
        self.bodies.ttl()
    }
}

// == Cache Key ==
/// Builds the cache key `path?query`, with an empty query when there is none.
pub fn cache_key(uri: &Uri) -> String {
    format!("{}?{}", uri.path(), uri.query().unwrap_or(""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_cache_key_format() {
        let uri: Uri = "/api/v1/news/search?query=rust&page=2".parse().unwrap();
        assert_eq!(cache_key(&uri), "/api/v1/news/search?query=rust&page=2");

        let uri: Uri = "/x".parse().unwrap();
        assert_eq!(cache_key(&uri), "/x?");
    }

    #[test]
    fn test_store_and_lookup() {
        let cache = ResponseCache::new(10, Duration::from_secs(300));

        assert!(cache.lookup("/x?a=1").is_none());
        cache.store("/x?a=1", Bytes::from_static(br#"{"n":1}"#));

        assert_eq!(cache.lookup("/x?a=1"), Some(Bytes::from_static(br#"{"n":1}"#)));
        assert!(cache.lookup("/x?a=2").is_none());
    }

    #[test]
    fn test_capacity_eviction() {
        let cache = ResponseCache::new(2, Duration::from_secs(1));

        cache.store("k1", Bytes::from_static(b"v1"));
        cache.store("k2", Bytes::from_static(b"v2"));
        cache.store("k3", Bytes::from_static(b"v3"));

        assert!(cache.lookup("k1").is_none());
        assert_eq!(cache.lookup("k2"), Some(Bytes::from_static(b"v2")));
        assert_eq!(cache.lookup("k3"), Some(Bytes::from_static(b"v3")));
    }

    #[test]
    fn test_entries_expire() {
        let cache = ResponseCache::new(10, Duration::from_secs(1));
        cache.store("k", Bytes::from_static(b"v"));

        sleep(Duration::from_millis(1100));

        assert!(cache.lookup("k").is_none());
        assert_eq!(cache.stats().misses, 1);
    }
}
