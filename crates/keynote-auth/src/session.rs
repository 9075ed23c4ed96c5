//! Opaque session tokens.
//!
//! The client keeps the raw token; the database only ever sees its digest.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, TimeDelta, Utc};
use keynote_core::identity::AuthIdentity;
use sha2::{Digest, Sha256};

use crate::error::AuthError;
use crate::random_bytes;

const TOKEN_BYTES: usize = 32;

/// A freshly minted session: the raw token and its expiry.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
}

impl IssuedSession {
    /// Mint a session valid for `ttl_hours` from now.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Entropy`] if the OS random source fails.
    pub fn mint(ttl_hours: u32) -> Result<Self, AuthError> {
        let token = URL_SAFE_NO_PAD.encode(random_bytes::<TOKEN_BYTES>()?);
        Ok(Self {
            token_hash: hash_token(&token),
            token,
            expires_at: Utc::now() + TimeDelta::hours(i64::from(ttl_hours)),
        })
    }
}

/// Digest under which a token is stored.
#[must_use]
pub fn hash_token(token: &str) -> String {
    URL_SAFE_NO_PAD.encode(Sha256::digest(token.trim().as_bytes()))
}

/// A resolved session row.
#[derive(Debug, Clone)]
pub struct SessionClaims {
    pub identity: AuthIdentity,
    pub expires_at: DateTime<Utc>,
}

impl SessionClaims {
    #[must_use]
    pub fn to_identity(&self) -> AuthIdentity {
        self.identity.clone()
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.is_near_expiry(0)
    }

    /// Expired, or expiring within `buffer_secs`.
    #[must_use]
    pub fn is_near_expiry(&self, buffer_secs: i64) -> bool {
        self.expires_at <= Utc::now() + TimeDelta::seconds(buffer_secs)
    }
}
