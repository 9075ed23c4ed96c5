//! Session lifetime and the admin allow-list.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One week.
const fn default_session_ttl_hours() -> u32 {
    168
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    #[serde(default = "default_session_ttl_hours")]
    pub session_ttl_hours: u32,

    /// Accounts created with one of these emails get admin rights.
    #[serde(default)]
    pub admin_emails: Vec<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_ttl_hours: default_session_ttl_hours(),
            admin_emails: Vec::new(),
        }
    }
}

impl AuthConfig {
    pub fn is_admin_email(&self, email: &str) -> bool {
        let email = email.trim();
        self.admin_emails
            .iter()
            .any(|admin| admin.trim().eq_ignore_ascii_case(email))
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero TTL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session_ttl_hours == 0 {
            return Err(ConfigError::InvalidValue {
                field: "auth.session_ttl_hours".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}
