//! `KeynoteService`: the database handle plus the caller's identity.
//!
//! Repository methods live in `repos/` as `impl KeynoteService` blocks.
//! Owner-scoped operations read the identity from here rather than taking a
//! user id argument, so a caller cannot ask for another account's rows.

use keynote_config::DatabaseConfig;
use keynote_core::identity::AuthIdentity;

use crate::KeynoteDb;
use crate::error::DatabaseError;

pub struct KeynoteService {
    db: KeynoteDb,
    identity: Option<AuthIdentity>,
}

impl KeynoteService {
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(
        db_path: &str,
        identity: Option<AuthIdentity>,
    ) -> Result<Self, DatabaseError> {
        let db = KeynoteDb::open_local(db_path).await?;
        Ok(Self::from_db(db, identity))
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the hosted database cannot be reached.
    pub async fn new_remote(
        url: &str,
        auth_token: &str,
        identity: Option<AuthIdentity>,
    ) -> Result<Self, DatabaseError> {
        let db = KeynoteDb::open_remote(url, auth_token).await?;
        Ok(Self::from_db(db, identity))
    }

    /// Open whichever database `config` points at.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened, or
    /// `InvalidState` if the local directory cannot be created.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        if config.is_remote() {
            return Self::new_remote(&config.url, &config.auth_token, None).await;
        }
        let path = config.resolved_path();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                DatabaseError::InvalidState(format!("mkdir {}: {e}", parent.display()))
            })?;
        }
        Self::new_local(&path.to_string_lossy(), None).await
    }

    #[must_use]
    pub const fn from_db(db: KeynoteDb, identity: Option<AuthIdentity>) -> Self {
        Self { db, identity }
    }

    #[must_use]
    pub const fn db(&self) -> &KeynoteDb {
        &self.db
    }

    #[must_use]
    pub const fn identity(&self) -> Option<&AuthIdentity> {
        self.identity.as_ref()
    }

    /// Attach (or clear) the signed-in identity.
    pub fn set_identity(&mut self, identity: Option<AuthIdentity>) {
        self.identity = identity;
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::Unauthorized` when nobody is signed in.
    pub fn require_identity(&self) -> Result<&AuthIdentity, DatabaseError> {
        self.identity
            .as_ref()
            .ok_or_else(|| DatabaseError::Unauthorized("sign in required".into()))
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::Unauthorized` unless the identity is an admin.
    pub fn require_admin(&self) -> Result<&AuthIdentity, DatabaseError> {
        let identity = self.require_identity()?;
        if identity.is_admin {
            Ok(identity)
        } else {
            Err(DatabaseError::Unauthorized("admin role required".into()))
        }
    }
}
