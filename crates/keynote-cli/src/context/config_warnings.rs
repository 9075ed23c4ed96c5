use keynote_config::{ENV_PREFIX, KeynoteConfig};

const SECTIONS: &[&str] = &["DATABASE", "AUTH", "GENERAL"];

/// Emit warnings for env keys that look like config but use a single
/// underscore after the section name, and so are silently ignored.
pub fn warn_unconfigured(config: &KeynoteConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &KeynoteConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut warnings = Vec::new();
    for (key, _) in env {
        let Some(rest) = key.strip_prefix(ENV_PREFIX) else {
            continue;
        };
        for section in SECTIONS {
            if let Some(field) = rest.strip_prefix(section)
                && let Some(field) = field.strip_prefix('_')
                && !field.starts_with('_')
                && !field.is_empty()
            {
                warnings.push(format!(
                    "{key} is ignored. Use double underscores (example: {ENV_PREFIX}{section}__{field})."
                ));
            }
        }
    }

    if config.auth.admin_emails.iter().any(|email| !email.contains('@')) {
        warnings.push(
            "auth.admin_emails contains an entry without '@'; it will never match.".to_string(),
        );
    }
    warnings
}
