//! Cross-cutting error types for Keynote.
//!
//! Domain-specific errors (`DatabaseError`, `AuthError`, `ConfigError`) live
//! in their own crates. The CLI converges everything into `anyhow`.

use thiserror::Error;

/// Errors raised by the pure domain logic in this crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Data failed validation. Carries the first failing field message.
    #[error("Validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::CoreError;

    #[test]
    fn validation_message_is_shown_to_the_user() {
        let error = CoreError::Validation("Fee must be at least $10,000".into());
        assert_eq!(error.to_string(), "Validation error: Fee must be at least $10,000");
    }
}
