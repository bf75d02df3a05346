//! Request and Response models for the news aggregator API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{BookmarkCreate, HeadlinesParams, NewsSearchParams, RegisterRequest};
pub use responses::{
    BookmarkResponse, HealthResponse, MessageResponse, NewsArticle, PipelineSettings,
    StatsResponse, StoreStatsResponse, UserResponse,
};
