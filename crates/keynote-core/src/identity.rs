use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Lightweight authenticated user identity for cross-crate passing.
///
/// Produced by `keynote-auth` session resolution, consumed by `keynote-db`
/// (owner scoping) and `keynote-cli`. Contains only data fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AuthIdentity {
    /// Account ID (`acc-` prefix).
    pub user_id: String,
    pub email: String,
    /// Optional display name captured at sign-up.
    pub display_name: Option<String>,
    /// Grants access to speaker management and the request inbox.
    pub is_admin: bool,
}

impl AuthIdentity {
    /// Name to greet the user with: display name when set, else the email.
    #[must_use]
    pub fn greeting_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_prefers_display_name() {
        let mut identity = AuthIdentity {
            user_id: "acc-00000001".into(),
            email: "ada@example.com".into(),
            display_name: Some("Ada".into()),
            is_admin: false,
        };
        assert_eq!(identity.greeting_name(), "Ada");

        identity.display_name = None;
        assert_eq!(identity.greeting_name(), "ada@example.com");
    }
}
