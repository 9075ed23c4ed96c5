//! Errors raised while loading keynote settings.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read keynote settings: {0}")]
    Figment(#[from] figment::Error),

    /// The section is present but unusable as written.
    #[error("[{section}] is incomplete; see `keynote --help` for the required keys")]
    NotConfigured { section: String },

    #[error("{field} is invalid: {reason}")]
    InvalidValue { field: String, reason: String },
}
