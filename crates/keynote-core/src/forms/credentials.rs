//! Sign-in / sign-up form.

use super::{FieldErrors, blank_to_none, collect, is_valid_email};
use crate::errors::CoreError;

pub const MIN_PASSWORD_CHARS: usize = 6;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialsForm {
    pub email: String,
    pub password: String,
    /// Sign-up only.
    pub full_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialErrors {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl FieldErrors for CredentialErrors {
    fn messages(&self) -> Vec<(&'static str, &str)> {
        let mut out = Vec::new();
        collect(&mut out, "email", &self.email);
        collect(&mut out, "password", &self.password);
        out
    }
}

/// Validated credentials with a normalized (trimmed, lowercased) email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
}

impl CredentialsForm {
    #[must_use]
    pub fn validate(&self) -> CredentialErrors {
        let mut errors = CredentialErrors::default();
        if self.email.trim().is_empty() {
            errors.email = Some("Email is required".into());
        } else if !is_valid_email(&self.email) {
            errors.email = Some("Please enter a valid email".into());
        }
        if self.password.is_empty() {
            errors.password = Some("Password is required".into());
        } else if self.password.chars().count() < MIN_PASSWORD_CHARS {
            errors.password = Some("Password must be at least 6 characters".into());
        }
        errors
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` with the first failing field.
    pub fn to_credentials(&self) -> Result<Credentials, CoreError> {
        if let Some(message) = self.validate().first() {
            return Err(CoreError::Validation(message));
        }
        Ok(Credentials {
            email: self.email.trim().to_lowercase(),
            password: self.password.clone(),
            full_name: blank_to_none(&self.full_name),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_email() {
        let form = CredentialsForm {
            email: "  Ada@Example.COM ".into(),
            password: "secret1".into(),
            full_name: String::new(),
        };
        let creds = form.to_credentials().unwrap();
        assert_eq!(creds.email, "ada@example.com");
        assert_eq!(creds.full_name, None);
    }

    #[test]
    fn short_password_fails() {
        let form = CredentialsForm {
            email: "ada@example.com".into(),
            password: "12345".into(),
            full_name: String::new(),
        };
        assert_eq!(
            form.validate().password.as_deref(),
            Some("Password must be at least 6 characters")
        );
    }
}
