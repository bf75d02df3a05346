//! API Module
//!
//! HTTP handlers and routing for the news aggregator REST API.
//!
//! # Endpoints
//! - `GET /` - Welcome message
//! - `/api/v1/register`, `/api/v1/me` - Users
//! - `/api/v1/bookmarks` - Saved articles
//! - `/api/v1/news/search`, `/api/v1/news/headlines` - News
//! - `GET /health`, `GET /stats` - Operations

pub mod bookmarks;
pub mod extract;
pub mod news;
pub mod routes;
pub mod state;
pub mod system;
pub mod users;

pub use routes::create_router;
pub use state::AppState;
