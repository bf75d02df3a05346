//! Stored records.

use chrono::{DateTime, Utc};

/// A registered user, identified externally by their Firebase UID.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub firebase_uid: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An article saved by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Bookmark {
    pub id: i64,
    pub user_id: i64,
    pub article_id: String,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub source: String,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
