use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AuthError;

pub const TOKEN_ENV: &str = "KEYNOTE_AUTH__TOKEN";
const SESSION_FILE_NAME: &str = "session";

/// Where the CLI keeps the raw session token.
///
/// # Errors
///
/// Returns [`AuthError::TokenStoreError`] when no config directory is known.
pub fn session_path() -> Result<PathBuf, AuthError> {
    dirs::config_dir()
        .map(|dir| dir.join("keynote").join(SESSION_FILE_NAME))
        .ok_or_else(|| {
            AuthError::TokenStoreError("config directory not found, cannot store session".into())
        })
}

/// # Errors
///
/// Returns [`AuthError::TokenStoreError`] if the file cannot be written.
pub fn store(token: &str) -> Result<(), AuthError> {
    store_at(&session_path()?, token)
}

/// `KEYNOTE_AUTH__TOKEN` first, then the session file.
#[must_use]
pub fn load() -> Option<String> {
    if let Ok(token) = std::env::var(TOKEN_ENV)
        && !token.trim().is_empty()
    {
        return Some(token.trim().to_string());
    }
    session_path().ok().and_then(|path| load_from(&path))
}

/// # Errors
///
/// Returns [`AuthError::TokenStoreError`] if the file exists but cannot be removed.
pub fn delete() -> Result<(), AuthError> {
    delete_at(&session_path()?)
}

/// Write `token` to `path`, owner-only on Unix.
///
/// # Errors
///
/// Returns [`AuthError::TokenStoreError`] on any filesystem failure.
pub fn store_at(path: &Path, token: &str) -> Result<(), AuthError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AuthError::TokenStoreError(format!("mkdir {}: {e}", parent.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
            }
        }
    }
    fs::write(path, token)
        .map_err(|e| AuthError::TokenStoreError(format!("write {}: {e}", path.display())))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))
            .map_err(|e| AuthError::TokenStoreError(format!("chmod {}: {e}", path.display())))?;
    }
    Ok(())
}

/// Blank files count as absent.
#[must_use]
pub fn load_from(path: &Path) -> Option<String> {
    fs::read_to_string(path)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// # Errors
///
/// Returns [`AuthError::TokenStoreError`] if the file exists but cannot be removed.
pub fn delete_at(path: &Path) -> Result<(), AuthError> {
    if path.exists() {
        fs::remove_file(path).map_err(|e| {
            AuthError::TokenStoreError(format!("failed to delete {}: {e}", path.display()))
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_path_is_under_keynote_dir() {
        if let Ok(path) = session_path() {
            assert!(path.ends_with("keynote/session"));
        }
    }

    #[test]
    fn store_load_delete_cycle() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("nested").join("session");

        store_at(&path, "tok_abc123").expect("store");
        assert_eq!(load_from(&path).as_deref(), Some("tok_abc123"));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(&path).expect("metadata").permissions().mode() & 0o777;
            assert_eq!(mode, 0o600, "session file should be 0600");
        }

        delete_at(&path).expect("delete");
        assert!(!path.exists());
        delete_at(&path).expect("deleting twice is fine");
    }

    #[test]
    fn whitespace_only_file_is_absent() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("session");
        fs::write(&path, "   \n ").expect("write");
        assert!(load_from(&path).is_none());
    }
}
