//! Database Module
//!
//! In-memory repository for users and their bookmarks. Data lives for the
//! lifetime of the process.

mod database;
mod records;

pub use database::Database;
pub use records::{Bookmark, User};
