use keynote_config::KeynoteConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration and apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<KeynoteConfig> {
    let mut config = KeynoteConfig::load_with_dotenv()?;
    apply_overrides(&mut config, flags);
    Ok(config)
}

/// `--database` wins over every file and env source and forces local mode.
fn apply_overrides(config: &mut KeynoteConfig, flags: &GlobalFlags) {
    if let Some(path) = &flags.database {
        tracing::debug!(path, "using database path from --database");
        config.database.path.clone_from(path);
        config.database.url.clear();
        config.database.auth_token.clear();
    }
}
