//! Accounts and sign-in sessions.
//!
//! Only password digests and session-token digests are stored.

use chrono::Utc;

use keynote_auth::{AuthError, IssuedSession, SessionClaims, hash_password, hash_token, verify_password};
use keynote_core::entities::Account;
use keynote_core::forms::Credentials;
use keynote_core::ids::PREFIX_ACCOUNT;

use super::Assignments;
use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, opt_value, parse_datetime};
use crate::service::KeynoteService;
use crate::updates::account::ProfileUpdate;

const SELECT_COLS: &str =
    "id, email, full_name, company, title, phone, is_admin, created_at, updated_at";

fn row_to_account(row: &libsql::Row) -> Result<Account, DatabaseError> {
    Ok(Account {
        id: row.get(0)?,
        email: row.get(1)?,
        full_name: get_opt_string(row, 2)?,
        company: get_opt_string(row, 3)?,
        title: get_opt_string(row, 4)?,
        phone: get_opt_string(row, 5)?,
        is_admin: row.get::<i64>(6)? != 0,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
        updated_at: parse_datetime(&row.get::<String>(8)?)?,
    })
}

impl KeynoteService {
    /// Register a new account. `is_admin` comes from the configured allow-list.
    pub async fn sign_up(
        &self,
        credentials: &Credentials,
        is_admin: bool,
    ) -> Result<Account, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_ACCOUNT).await?;
        let password_hash = hash_password(&credentials.password)?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO accounts (id, email, password_hash, full_name, is_admin, created_at, updated_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                libsql::params_from_iter(vec![
                    libsql::Value::from(id.clone()),
                    credentials.email.clone().into(),
                    password_hash.into(),
                    opt_value(credentials.full_name.clone()),
                    i64::from(is_admin).into(),
                    now.to_rfc3339().into(),
                    now.to_rfc3339().into(),
                ]),
            )
            .await
            .map_err(|e| match DatabaseError::from_write(e) {
                DatabaseError::Duplicate(_) => AuthError::EmailTaken.into(),
                other => other,
            })?;

        tracing::info!(account_id = %id, "account created");
        self.get_account(&id).await
    }

    /// Verify credentials and open a session lasting `ttl_hours`.
    ///
    /// Unknown email and wrong password fail identically.
    pub async fn sign_in(
        &self,
        credentials: &Credentials,
        ttl_hours: u32,
    ) -> Result<(Account, IssuedSession), DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, password_hash FROM accounts WHERE email = ?1",
                [credentials.email.as_str()],
            )
            .await?;
        let Some(row) = rows.next().await? else {
            return Err(AuthError::InvalidCredentials.into());
        };
        let account_id: String = row.get(0)?;
        let stored: String = row.get(1)?;
        if !verify_password(&credentials.password, &stored)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let session = IssuedSession::mint(ttl_hours)?;
        self.db()
            .conn()
            .execute(
                "INSERT INTO auth_sessions (token_hash, account_id, expires_at, created_at) \
                 VALUES (?1, ?2, ?3, ?4)",
                libsql::params![
                    session.token_hash.as_str(),
                    account_id.as_str(),
                    session.expires_at.to_rfc3339(),
                    Utc::now().to_rfc3339()
                ],
            )
            .await?;

        tracing::info!(account_id = %account_id, "signed in");
        let account = self.get_account(&account_id).await?;
        Ok((account, session))
    }

    /// Resolve a raw token to its account. Expired sessions are removed.
    pub async fn resolve_session(&self, token: &str) -> Result<SessionClaims, DatabaseError> {
        let token_hash = hash_token(token);
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT account_id, expires_at FROM auth_sessions WHERE token_hash = ?1",
                [token_hash.as_str()],
            )
            .await?;
        let Some(row) = rows.next().await? else {
            return Err(AuthError::NotAuthenticated.into());
        };
        let account_id: String = row.get(0)?;
        let claims = SessionClaims {
            identity: self.get_account(&account_id).await?.to_identity(),
            expires_at: parse_datetime(&row.get::<String>(1)?)?,
        };
        if claims.is_expired() {
            self.delete_session(&token_hash).await?;
            return Err(AuthError::SessionExpired.into());
        }
        Ok(claims)
    }

    /// End the session for `token`. Unknown tokens are ignored.
    pub async fn sign_out(&self, token: &str) -> Result<(), DatabaseError> {
        self.delete_session(&hash_token(token)).await
    }

    async fn delete_session(&self, token_hash: &str) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute("DELETE FROM auth_sessions WHERE token_hash = ?1", [token_hash])
            .await?;
        Ok(())
    }

    /// Drop every expired session row. Returns how many were removed.
    pub async fn purge_expired_sessions(&self) -> Result<u64, DatabaseError> {
        let removed = self
            .db()
            .conn()
            .execute(
                "DELETE FROM auth_sessions WHERE expires_at <= ?1",
                [Utc::now().to_rfc3339()],
            )
            .await?;
        Ok(removed)
    }

    pub async fn get_account(&self, id: &str) -> Result<Account, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM accounts WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_account(&row)
    }

    /// The signed-in account.
    pub async fn current_account(&self) -> Result<Account, DatabaseError> {
        let id = self.require_identity()?.user_id.clone();
        self.get_account(&id).await
    }

    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<Account, DatabaseError> {
        let id = self.require_identity()?.user_id.clone();

        let mut assignments = Assignments::default();
        if let Some(full_name) = update.full_name {
            assignments.set("full_name", opt_value(full_name));
        }
        if let Some(company) = update.company {
            assignments.set("company", opt_value(company));
        }
        if let Some(title) = update.title {
            assignments.set("title", opt_value(title));
        }
        if let Some(phone) = update.phone {
            assignments.set("phone", opt_value(phone));
        }
        if assignments.is_empty() {
            return self.get_account(&id).await;
        }
        assignments.set("updated_at", Utc::now().to_rfc3339());

        let (sql, params) =
            assignments.into_statement("accounts", |n| format!("id = ?{n}"), vec![id.clone().into()]);
        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        self.get_account(&id).await
    }
}
