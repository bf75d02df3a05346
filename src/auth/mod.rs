//! Authentication Module
//!
//! Bearer-token verification and resolution of the calling user.

mod extract;
mod verifier;

pub use extract::{bearer_token, require_user, CurrentUser};
pub use verifier::{StaticTokenVerifier, TokenVerifier, VerifyError};
