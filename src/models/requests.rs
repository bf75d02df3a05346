//! Request DTOs for the news aggregator API
//!
//! Defines the structure of incoming request bodies and query strings.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Maximum length of bookmark text fields (article id, title, source)
pub const MAX_BOOKMARK_FIELD_LENGTH: usize = 255;
/// Maximum length of a bookmark URL
pub const MAX_BOOKMARK_URL_LENGTH: usize = 512;
/// Maximum length of a Firebase UID
pub const MAX_FIREBASE_UID_LENGTH: usize = 128;
/// Upper bound for `page_size` on news queries
pub const MAX_PAGE_SIZE: i64 = 100;

/// Request body for registration (POST /api/v1/register)
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub firebase_uid: String,
}

impl RegisterRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if !is_valid_email(&self.email) {
            return Some("value is not a valid email address".to_string());
        }
        if self.firebase_uid.trim().is_empty() {
            return Some("firebase_uid cannot be empty".to_string());
        }
        if self.firebase_uid.len() > MAX_FIREBASE_UID_LENGTH {
            return Some(format!(
                "firebase_uid exceeds maximum length of {} characters",
                MAX_FIREBASE_UID_LENGTH
            ));
        }
        None
    }
}

/// Request body for bookmark creation (POST /api/v1/bookmarks)
#[derive(Debug, Clone, Deserialize)]
pub struct BookmarkCreate {
    pub article_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
    pub source: String,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

impl BookmarkCreate {
    pub fn validate(&self) -> Option<String> {
        let fields = [
            ("article_id", &self.article_id, MAX_BOOKMARK_FIELD_LENGTH),
            ("title", &self.title, MAX_BOOKMARK_FIELD_LENGTH),
            ("url", &self.url, MAX_BOOKMARK_URL_LENGTH),
            ("source", &self.source, MAX_BOOKMARK_FIELD_LENGTH),
        ];
        fields
            .into_iter()
            .find_map(|(name, value, max)| check_length(name, value, max))
    }
}

/// Query string for GET /api/v1/news/search
#[derive(Debug, Clone, Deserialize)]
pub struct NewsSearchParams {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_page_size")]
    pub page_size: i64,
    #[serde(default = "default_page")]
    pub page: i64,
}

impl NewsSearchParams {
    pub fn validate(&self) -> Option<String> {
        check_page_size(self.page_size).or_else(|| {
            (self.page < 1).then(|| "page must be greater than or equal to 1".to_string())
        })
    }

    /// Builds the provider query: the free-text query plus `category:<name>`.
    ///
    /// Returns None when both are empty.
    pub fn provider_query(&self) -> Option<String> {
        let mut q = self.query.as_deref().unwrap_or("").trim().to_string();
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            if !q.is_empty() {
                q.push(' ');
            }
            q.push_str("category:");
            q.push_str(category);
        }
        (!q.is_empty()).then_some(q)
    }
}

impl Default for NewsSearchParams {
    fn default() -> Self {
        Self {
            query: None,
            category: None,
            language: default_language(),
            page_size: default_page_size(),
            page: default_page(),
        }
    }
}

/// Query string for GET /api/v1/news/headlines
#[derive(Debug, Clone, Deserialize)]
pub struct HeadlinesParams {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default = "default_country")]
    pub country: String,
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

impl HeadlinesParams {
    pub fn validate(&self) -> Option<String> {
        check_page_size(self.page_size)
    }
}

impl Default for HeadlinesParams {
    fn default() -> Self {
        Self {
            category: None,
            country: default_country(),
            page_size: default_page_size(),
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}

fn default_country() -> String {
    "us".to_string()
}

fn default_page_size() -> i64 {
    10
}

fn default_page() -> i64 {
    1
}

fn check_page_size(page_size: i64) -> Option<String> {
    if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
        return Some(format!("page_size must be between 1 and {}", MAX_PAGE_SIZE));
    }
    None
}

fn check_length(name: &str, value: &str, max: usize) -> Option<String> {
    let len = value.chars().count();
    if len == 0 {
        return Some(format!("{} cannot be empty", name));
    }
    if len > max {
        return Some(format!("{} exceeds maximum length of {} characters", name, max));
    }
    None
}

/// Structural email check: one `@`, non-empty local part, dotted domain, no whitespace.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bookmark() -> BookmarkCreate {
        BookmarkCreate {
            article_id: "article-1".to_string(),
            title: "Rust 2.0 released".to_string(),
            description: None,
            url: "https://example.com/rust".to_string(),
            source: "Example".to_string(),
            published_at: None,
        }
    }

    #[test]
    fn test_register_request_validation() {
        let mut req = RegisterRequest {
            email: "reader@example.com".to_string(),
            firebase_uid: "uid-1".to_string(),
        };
        assert!(req.validate().is_none());

        req.email = "not-an-email".to_string();
        assert!(req.validate().is_some());

        req.email = "reader@example.com".to_string();
        req.firebase_uid = "x".repeat(MAX_FIREBASE_UID_LENGTH + 1);
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("a b@c.co"));
    }

    #[test]
    fn test_bookmark_deserialize() {
        let json = r#"{"article_id":"a1","title":"t","url":"https://x.io","source":"s",
                       "published_at":"2024-01-01T00:00:00Z"}"#;
        let req: BookmarkCreate = serde_json::from_str(json).unwrap();
        assert_eq!(req.article_id, "a1");
        assert!(req.description.is_none());
        assert!(req.published_at.is_some());
    }

    #[test]
    fn test_bookmark_validation() {
        assert!(bookmark().validate().is_none());

        let mut req = bookmark();
        req.title = String::new();
        assert_eq!(req.validate().as_deref(), Some("title cannot be empty"));

        let mut req = bookmark();
        req.url = "u".repeat(MAX_BOOKMARK_URL_LENGTH);
        assert!(req.validate().is_none());
        req.url.push('u');
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_search_params_defaults() {
        let params: NewsSearchParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.language, "en");
        assert_eq!(params.page_size, 10);
        assert_eq!(params.page, 1);
        assert!(params.validate().is_none());
    }

    #[test]
    fn test_search_params_validation() {
        let params = NewsSearchParams {
            page_size: 101,
            ..Default::default()
        };
        assert!(params.validate().is_some());

        let params = NewsSearchParams {
            page: 0,
            ..Default::default()
        };
        assert!(params.validate().is_some());
    }

    #[test]
    fn test_provider_query() {
        let mut params = NewsSearchParams::default();
        assert_eq!(params.provider_query(), None);

        params.query = Some("rust".to_string());
        assert_eq!(params.provider_query().as_deref(), Some("rust"));

        params.category = Some("technology".to_string());
        assert_eq!(
            params.provider_query().as_deref(),
            Some("rust category:technology")
        );

        params.query = None;
        assert_eq!(
            params.provider_query().as_deref(),
            Some("category:technology")
        );
    }

    #[test]
    fn test_headlines_params_validation() {
        let params = HeadlinesParams::default();
        assert_eq!(params.country, "us");
        assert!(params.validate().is_none());

        let params = HeadlinesParams {
            page_size: 0,
            ..Default::default()
        };
        assert!(params.validate().is_some());
    }
}
