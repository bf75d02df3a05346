//! Cache Module
//!
//! Provides the bounded, time-expiring key-value store shared by the rate
//! limiter and the response cache.

mod entry;
mod order;
mod stats;
mod store;


// Re-export public types
pub use entry::ExpiringEntry;
pub use order::InsertionOrder;
pub use stats::CacheStats;
pub use store::ExpiringStore;
