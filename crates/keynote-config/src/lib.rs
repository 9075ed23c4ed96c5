//! # keynote-config
//!
//! Layered configuration for the Keynote CLI, built on figment.
//!
//! Sources, highest priority first:
//! 1. `KEYNOTE_*` environment variables (`__` separates sections, so
//!    `KEYNOTE_DATABASE__PATH` sets `database.path`)
//! 2. Project-level `.keynote/config.toml`
//! 3. User-level `<config dir>/keynote/config.toml`
//! 4. Built-in defaults
//!
//! ```no_run
//! use keynote_config::KeynoteConfig;
//!
//! let config = KeynoteConfig::load_with_dotenv().expect("config");
//! if config.database.is_remote() {
//!     println!("remote: {}", config.database.url);
//! }
//! ```

mod auth;
mod database;
mod error;
mod general;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

pub const ENV_PREFIX: &str = "KEYNOTE_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct KeynoteConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl KeynoteConfig {
    /// Load from TOML files and environment variables, then validate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on a malformed source or an invalid value.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// [`load`](Self::load), after reading the nearest `.env` file.
    ///
    /// # Errors
    ///
    /// See [`load`](Self::load).
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        load_dotenv_from_workspace();
        Self::load()
    }

    /// The provider chain. Public so tests can layer extra providers.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".keynote/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// # Errors
    ///
    /// Returns the first section that fails its own check.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.database.validate()?;
        self.auth.validate()?;
        if self.general.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.default_limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}

/// `<config dir>/keynote`, home of the user config file and the session token.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("keynote"))
}

fn global_config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

/// Walk up from `CARGO_MANIFEST_DIR` (crate, `crates/`, workspace) looking for
/// `.env`, then fall back to the current directory. Missing files are ignored.
fn load_dotenv_from_workspace() {
    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        let mut dir = PathBuf::from(manifest_dir);
        for _ in 0..3 {
            let env_path = dir.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            if !dir.pop() {
                break;
            }
        }
    }
    let _ = dotenvy::dotenv();
}
