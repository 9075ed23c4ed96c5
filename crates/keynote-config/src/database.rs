//! Database location: a local libSQL file, or a hosted database when both
//! `url` and `auth_token` are set.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const DEFAULT_FILE_NAME: &str = "keynote.db";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Local database file. Empty means the per-user data directory.
    #[serde(default)]
    pub path: String,

    /// Hosted database URL (e.g. `libsql://keynote-acme.turso.io`).
    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub auth_token: String,
}

impl DatabaseConfig {
    /// True when the hosted database should be used instead of a local file.
    pub fn is_remote(&self) -> bool {
        !self.url.is_empty() && !self.auth_token.is_empty()
    }

    /// Local file path, falling back to `<data dir>/keynote/keynote.db`, then
    /// `.keynote/keynote.db` when no data directory is known.
    pub fn resolved_path(&self) -> PathBuf {
        if !self.path.is_empty() {
            return PathBuf::from(&self.path);
        }
        dirs::data_dir().map_or_else(
            || PathBuf::from(".keynote").join(DEFAULT_FILE_NAME),
            |dir| dir.join("keynote").join(DEFAULT_FILE_NAME),
        )
    }

    /// A URL without a token is a half-configured remote.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] for a URL with no token.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.url.is_empty() && self.auth_token.is_empty() {
            return Err(ConfigError::NotConfigured {
                section: "database".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let config = DatabaseConfig {
            path: "/tmp/k.db".into(),
            ..Default::default()
        };
        assert_eq!(config.resolved_path(), PathBuf::from("/tmp/k.db"));
        assert!(!config.is_remote());
    }

    #[test]
    fn default_path_ends_with_file_name() {
        let path = DatabaseConfig::default().resolved_path();
        assert!(path.ends_with(PathBuf::from("keynote").join(DEFAULT_FILE_NAME)));
    }

    #[test]
    fn url_without_token_is_rejected() {
        let config = DatabaseConfig {
            url: "libsql://x.turso.io".into(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotConfigured { .. })
        ));
    }
}
