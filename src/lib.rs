//! News Aggregator - News search, headlines and bookmarks API
//!
//! Requests pass through a per-client rate limiter and a response cache, both
//! built on a bounded, time-expiring in-memory store.

pub mod api;
pub mod auth;
pub mod cache;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod news;

pub use api::{create_router, AppState};
pub use config::Config;
