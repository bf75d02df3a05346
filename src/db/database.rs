//! In-memory database
//!
//! Tables are guarded by a single async RwLock so multi-step checks such as
//! "exists, then insert" are atomic.

use std::collections::{BTreeMap, HashMap};

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;

use super::records::{Bookmark, User};
use crate::error::{AppError, Result};
use crate::models::BookmarkCreate;

// == Database ==
#[derive(Debug, Default)]
pub struct Database {
    tables: RwLock<Tables>,
}

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<i64, User>,
    /// firebase_uid -> user id
    users_by_uid: HashMap<String, i64>,
    bookmarks: BTreeMap<i64, Bookmark>,
    next_user_id: i64,
    next_bookmark_id: i64,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    // == Users ==
    /// Inserts a user; UIDs and emails are unique.
    pub async fn create_user(&self, email: &str, firebase_uid: &str) -> Result<User> {
        let mut tables = self.tables.write().await;

        if tables.users_by_uid.contains_key(firebase_uid) {
            return Err(AppError::BadRequest("User already exists".to_string()));
        }
        if tables.users.values().any(|u| u.email.eq_ignore_ascii_case(email)) {
            return Err(AppError::BadRequest("Email already registered".to_string()));
        }

        tables.next_user_id += 1;
        let now = Utc::now();
        let user = User {
            id: tables.next_user_id,
            firebase_uid: firebase_uid.to_string(),
            email: email.to_string(),
            created_at: now,
            updated_at: now,
        };
        tables.users_by_uid.insert(user.firebase_uid.clone(), user.id);
        tables.users.insert(user.id, user.clone());

        info!(user_id = user.id, "Registered user");
        Ok(user)
    }

    pub async fn find_user_by_firebase_uid(&self, firebase_uid: &str) -> Option<User> {
        let tables = self.tables.read().await;
        let id = tables.users_by_uid.get(firebase_uid)?;
        tables.users.get(id).cloned()
    }

    // == Bookmarks ==
    /// Saves an article for `user_id`; one bookmark per user and article.
    pub async fn create_bookmark(&self, user_id: i64, data: BookmarkCreate) -> Result<Bookmark> {
        let mut tables = self.tables.write().await;

        let duplicate = tables
            .bookmarks
            .values()
            .any(|b| b.user_id == user_id && b.article_id == data.article_id);
        if duplicate {
            return Err(AppError::BadRequest("Bookmark already exists".to_string()));
        }

        tables.next_bookmark_id += 1;
        let now = Utc::now();
        let bookmark = Bookmark {
            id: tables.next_bookmark_id,
            user_id,
            article_id: data.article_id,
            title: data.title,
            description: data.description,
            url: data.url,
            source: data.source,
            published_at: data.published_at,
            created_at: now,
            updated_at: now,
        };
        tables.bookmarks.insert(bookmark.id, bookmark.clone());

        Ok(bookmark)
    }

    /// Returns the user's bookmarks ordered by id.
    pub async fn list_bookmarks(&self, user_id: i64) -> Vec<Bookmark> {
        let tables = self.tables.read().await;
        tables
            .bookmarks
            .values()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Deletes a bookmark owned by `user_id`.
    pub async fn delete_bookmark(&self, bookmark_id: i64, user_id: i64) -> Result<()> {
        let mut tables = self.tables.write().await;

        match tables.bookmarks.get(&bookmark_id).map(|b| b.user_id) {
            None => Err(AppError::NotFound("Bookmark not found".to_string())),
            Some(owner) if owner != user_id => Err(AppError::Forbidden(
                "Not authorized to delete this bookmark".to_string(),
            )),
            Some(_) => {
                tables.bookmarks.remove(&bookmark_id);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bookmark(article_id: &str) -> BookmarkCreate {
        BookmarkCreate {
            article_id: article_id.to_string(),
            title: "Title".to_string(),
            description: Some("Description".to_string()),
            url: format!("https://example.com/{}", article_id),
            source: "Example".to_string(),
            published_at: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_find_user() {
        let db = Database::new();

        let user = db.create_user("a@example.com", "uid-a").await.unwrap();
        assert_eq!(user.id, 1);

        let found = db.find_user_by_firebase_uid("uid-a").await.unwrap();
        assert_eq!(found, user);
        assert!(db.find_user_by_firebase_uid("uid-b").await.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_user_rejected() {
        let db = Database::new();
        db.create_user("a@example.com", "uid-a").await.unwrap();

        let err = db.create_user("other@example.com", "uid-a").await.unwrap_err();
        assert_eq!(err.to_string(), "User already exists");

        let err = db.create_user("A@example.com", "uid-b").await.unwrap_err();
        assert_eq!(err.to_string(), "Email already registered");
    }

    #[tokio::test]
    async fn test_bookmarks_are_per_user() {
        let db = Database::new();

        db.create_bookmark(1, bookmark("a1")).await.unwrap();
        db.create_bookmark(1, bookmark("a2")).await.unwrap();
        db.create_bookmark(2, bookmark("a1")).await.unwrap();

        let ids: Vec<i64> = db.list_bookmarks(1).await.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(db.list_bookmarks(2).await.len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_bookmark_rejected() {
        let db = Database::new();
        db.create_bookmark(1, bookmark("a1")).await.unwrap();

        let err = db.create_bookmark(1, bookmark("a1")).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_delete_bookmark() {
        let db = Database::new();
        let saved = db.create_bookmark(1, bookmark("a1")).await.unwrap();

        let err = db.delete_bookmark(saved.id, 2).await.unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));

        db.delete_bookmark(saved.id, 1).await.unwrap();
        assert!(db.list_bookmarks(1).await.is_empty());

        let err = db.delete_bookmark(saved.id, 1).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
