//! Argon2id password hashes, stored as PHC strings (`$argon2id$v=19$...`).

use argon2::Argon2;
use argon2::password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};

use crate::error::AuthError;
use crate::random_bytes;

const SALT_BYTES: usize = 16;

/// Hash `password` with a fresh random salt and the default Argon2id cost.
///
/// # Errors
///
/// Returns [`AuthError::Entropy`] if the OS random source fails, or
/// [`AuthError::Hashing`] if Argon2 rejects the input.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let bytes = random_bytes::<SALT_BYTES>()?;
    let salt = SaltString::encode_b64(&bytes).map_err(|e| AuthError::Hashing(e.to_string()))?;
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::Hashing(e.to_string()))?;
    Ok(hash.to_string())
}

/// Check `password` against a stored PHC string.
///
/// The cost parameters come from the stored string, so older hashes keep
/// verifying after the default cost changes.
///
/// # Errors
///
/// Returns [`AuthError::MalformedHash`] when `stored` is not a PHC string.
pub fn verify_password(password: &str, stored: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(stored).map_err(|_| AuthError::MalformedHash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(error) => Err(AuthError::Hashing(error.to_string())),
    }
}
