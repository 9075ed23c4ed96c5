use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not signed in: run `keynote auth login`")]
    NotAuthenticated,

    #[error("session expired: run `keynote auth login` again")]
    SessionExpired,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("An account with this email already exists")]
    EmailTaken,

    #[error("random source unavailable: {0}")]
    Entropy(String),

    #[error("password hashing failed: {0}")]
    Hashing(String),

    #[error("malformed password hash")]
    MalformedHash,

    #[error("token store error: {0}")]
    TokenStoreError(String),
}
