use anyhow::Context;
use keynote_auth::AuthError;
use keynote_config::KeynoteConfig;
use keynote_core::identity::AuthIdentity;
use keynote_db::error::DatabaseError;
use keynote_db::gateway::Gateway;
use keynote_db::service::KeynoteService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: KeynoteService,
    pub config: KeynoteConfig,
    pub identity: Option<AuthIdentity>,
    pub auth_token: Option<String>,
}

impl AppContext {
    /// Open the configured database and resolve the stored session, if any.
    ///
    /// A missing or expired session is not an error here: public commands
    /// work without one, and the rest check [`require_identity`](Self::require_identity).
    pub async fn init(config: KeynoteConfig) -> anyhow::Result<Self> {
        let mut service = KeynoteService::open(&config.database)
            .await
            .context("failed to open keynote database")?;

        let auth_token = keynote_auth::resolve_token();
        let identity = match &auth_token {
            Some(token) => resolve_identity(&service, &config, token).await,
            None => None,
        };
        service.set_identity(identity.clone());

        Ok(Self {
            service,
            config,
            identity,
            auth_token,
        })
    }

    #[cfg(test)]
    pub fn for_service(service: KeynoteService, config: KeynoteConfig) -> Self {
        let identity = service.identity().cloned();
        Self {
            service,
            config,
            identity,
            auth_token: None,
        }
    }

    /// Sentinel-returning data access for presentation code.
    pub const fn gateway(&self) -> Gateway<'_> {
        Gateway::new(&self.service)
    }

    pub fn require_identity(&self) -> anyhow::Result<&AuthIdentity> {
        self.identity
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("{}", AuthError::NotAuthenticated))
    }

    pub fn require_admin(&self) -> anyhow::Result<&AuthIdentity> {
        let identity = self.require_identity()?;
        if !identity.is_admin {
            anyhow::bail!("{} is not an admin account", identity.email);
        }
        Ok(identity)
    }
}

async fn resolve_identity(
    service: &KeynoteService,
    config: &KeynoteConfig,
    token: &str,
) -> Option<AuthIdentity> {
    match service.resolve_session(token).await {
        Ok(claims) => {
            let mut identity = claims.to_identity();
            // The allow-list can grant admin after sign-up.
            identity.is_admin = identity.is_admin || config.auth.is_admin_email(&identity.email);
            tracing::debug!(user_id = %identity.user_id, "session resolved");
            Some(identity)
        }
        Err(DatabaseError::Auth(AuthError::SessionExpired)) => {
            tracing::warn!("session expired; run `keynote auth login` to sign in again");
            None
        }
        Err(DatabaseError::Auth(AuthError::NotAuthenticated)) => {
            tracing::debug!("stored session token is not recognised");
            None
        }
        Err(error) => {
            tracing::warn!(%error, "failed to resolve session; continuing signed out");
            None
        }
    }
}
