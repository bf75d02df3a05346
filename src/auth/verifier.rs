//! Token verification seam.

use std::collections::HashMap;

use thiserror::Error;

/// Why a bearer token was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    #[error("Expired authentication token")]
    Expired,

    #[error("Invalid authentication token")]
    Invalid,
}

// == Token Verifier ==
/// Turns a bearer token into the identity provider's user id (Firebase UID).
pub trait TokenVerifier: Send + Sync + 'static {
    fn verify(&self, token: &str) -> Result<String, VerifyError>;
}

// == Static Token Verifier ==
/// Verifier backed by a fixed token -> UID table.
///
/// Stands in for the external identity provider in development and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenVerifier {
    tokens: HashMap<String, String>,
}

impl StaticTokenVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(mut self, token: impl Into<String>, uid: impl Into<String>) -> Self {
        self.tokens.insert(token.into(), uid.into());
        self
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl FromIterator<(String, String)> for StaticTokenVerifier {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl TokenVerifier for StaticTokenVerifier {
    fn verify(&self, token: &str) -> Result<String, VerifyError> {
        self.tokens.get(token).cloned().ok_or(VerifyError::Invalid)
    }
}
