//! Database error types for keynote-db.

use keynote_auth::AuthError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Query failed: {0}")]
    Query(String),

    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a row but none came back (also used for rows the caller may not see).
    #[error("No result returned")]
    NoResult,

    /// A unique key rejected the write.
    #[error("Duplicate: {0}")]
    Duplicate(String),

    /// No identity, or an identity without the required role.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DatabaseError {
    /// Classify a write error, surfacing unique-key violations as [`Self::Duplicate`].
    ///
    /// Local and hosted libSQL report the violation with the same `SQLite`
    /// message, so the text is the common ground.
    #[must_use]
    pub fn from_write(error: libsql::Error) -> Self {
        let message = error.to_string();
        if message.contains("UNIQUE constraint failed") {
            Self::Duplicate(message)
        } else {
            Self::LibSql(error)
        }
    }
}
