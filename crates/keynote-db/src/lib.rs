//! # keynote-db
//!
//! libSQL storage for the Keynote directory: schema, repositories on
//! [`service::KeynoteService`], the predicate-to-SQL compiler, and the
//! [`gateway::Gateway`] wrappers that turn failures into sentinel values.
//!
//! A local file (or `:memory:`) is used in development and tests; a hosted
//! libSQL database in production.

pub mod error;
pub mod gateway;
pub mod helpers;
mod migrations;
pub mod query;
pub mod repos;
pub mod service;
pub mod updates;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Database handle: one libSQL database and its connection.
pub struct KeynoteDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    remote: bool,
}

impl KeynoteDb {
    /// Open a local database file, or `":memory:"`. Runs migrations.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the file cannot be opened or migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        Self::connect(db, false).await
    }

    /// Open a hosted database. Runs migrations.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection or migrations fail.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        Self::connect(db, true).await
    }

    async fn connect(db: libsql::Database, remote: bool) -> Result<Self, DatabaseError> {
        let conn = db.connect()?;

        // Per-connection in SQLite; cascades depend on it.
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let keynote_db = Self { db, conn, remote };
        keynote_db.run_migrations().await?;
        tracing::debug!(remote, "database opened");
        Ok(keynote_db)
    }

    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    #[must_use]
    pub const fn is_remote(&self) -> bool {
        self.remote
    }

    /// Prefixed random ID such as `"spk-a3f8b2c1"`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keynote_core::ids::{PREFIX_SPEAKER, PREFIX_WISHLIST};

    async fn test_db() -> KeynoteDb {
        KeynoteDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;
        let tables = [
            "speakers",
            "testimonials",
            "qualification_requests",
            "accounts",
            "auth_sessions",
            "projects",
            "speaker_wishlists",
        ];
        for table in &tables {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [*table],
                )
                .await
                .unwrap();
            assert!(rows.next().await.unwrap().is_some(), "table '{table}' should exist");
        }
        assert!(!db.is_remote());
    }

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn foreign_keys_enabled() {
        let db = test_db().await;
        let mut rows = db.conn().query("PRAGMA foreign_keys", ()).await.unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<i64>(0).unwrap(), 1);
    }

    #[tokio::test]
    async fn generate_id_format() {
        let db = test_db().await;
        let id = db.generate_id(PREFIX_SPEAKER).await.unwrap();
        assert!(id.starts_with("spk-"));
        assert_eq!(id.len(), 12);
        let other = db.generate_id(PREFIX_WISHLIST).await.unwrap();
        assert_ne!(id, other);
    }
}
