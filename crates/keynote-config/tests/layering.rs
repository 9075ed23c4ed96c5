//! TOML and environment layering, sandboxed with `figment::Jail`.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use keynote_config::{ConfigError, KeynoteConfig};
use pretty_assertions::assert_eq;

fn layered(file: &str) -> Figment {
    Figment::from(Serialized::defaults(KeynoteConfig::default()))
        .merge(Toml::file(file))
        .merge(Env::prefixed("KEYNOTE_").split("__"))
}

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "./data/keynote.db"

[auth]
session_ttl_hours = 24
admin_emails = ["ops@example.com"]

[general]
default_limit = 50
"#,
        )?;

        let config: KeynoteConfig = layered("config.toml").extract()?;
        assert_eq!(config.database.path, "./data/keynote.db");
        assert_eq!(config.auth.session_ttl_hours, 24);
        assert_eq!(config.auth.admin_emails, vec!["ops@example.com".to_string()]);
        assert_eq!(config.general.default_limit, 50);
        Ok(())
    });
}

#[test]
fn env_beats_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "from-toml.db"

[auth]
session_ttl_hours = 24
"#,
        )?;
        jail.set_env("KEYNOTE_DATABASE__PATH", "from-env.db");
        jail.set_env("KEYNOTE_AUTH__SESSION_TTL_HOURS", "2");

        let config: KeynoteConfig = layered("config.toml").extract()?;
        assert_eq!(config.database.path, "from-env.db");
        assert_eq!(config.auth.session_ttl_hours, 2);
        Ok(())
    });
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[general]\ndefault_limit = 5\n")?;
        let config: KeynoteConfig = layered("config.toml").extract()?;
        assert_eq!(config.general.default_limit, 5);
        assert_eq!(config.auth.session_ttl_hours, 168);
        assert!(config.database.path.is_empty());
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".keynote")?;
        jail.create_file(".keynote/config.toml", "[general]\ndefault_limit = 7\n")?;
        let config = KeynoteConfig::load().expect("config loads");
        assert_eq!(config.general.default_limit, 7);
        Ok(())
    });
}

#[test]
fn remote_url_without_token_fails_load() {
    Jail::expect_with(|jail| {
        jail.set_env("KEYNOTE_DATABASE__URL", "libsql://keynote.turso.io");
        let err = KeynoteConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::NotConfigured { .. }));
        Ok(())
    });
}

#[test]
fn remote_with_token_is_remote() {
    Jail::expect_with(|jail| {
        jail.set_env("KEYNOTE_DATABASE__URL", "libsql://keynote.turso.io");
        jail.set_env("KEYNOTE_DATABASE__AUTH_TOKEN", "tok");
        let config = KeynoteConfig::load().expect("config loads");
        assert!(config.database.is_remote());
        Ok(())
    });
}
