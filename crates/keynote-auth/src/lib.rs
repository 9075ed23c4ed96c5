//! # keynote-auth
//!
//! Email + password authentication primitives for the Keynote CLI.
//!
//! Passwords are stored as salted SHA-256 digests. Signing in mints an opaque
//! session token; the database keeps only its digest, and the CLI keeps the
//! raw token on disk (or reads it from `KEYNOTE_AUTH__TOKEN`).

pub mod error;
pub mod password;
pub mod session;
pub mod token_store;

pub use error::AuthError;
pub use password::{hash_password, verify_password};
pub use session::{IssuedSession, SessionClaims, hash_token};

/// Best available raw session token, if any.
#[must_use]
pub fn resolve_token() -> Option<String> {
    token_store::load()
}

/// Forget the locally stored session.
///
/// # Errors
///
/// Returns [`AuthError::TokenStoreError`] if the session file cannot be removed.
pub fn logout() -> Result<(), AuthError> {
    token_store::delete()
}

pub(crate) fn random_bytes<const N: usize>() -> Result<[u8; N], AuthError> {
    let mut buf = [0u8; N];
    getrandom::fill(&mut buf).map_err(|e| AuthError::Entropy(e.to_string()))?;
    Ok(buf)
}
