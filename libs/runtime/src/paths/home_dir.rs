//! Resolution of the server home directory.
//!
//! The home directory anchors every relative path the server writes to
//! (the user store, log files). Resolution rules:
//! - `None` → platform base + `default_subdir`
//!   (Windows: roaming app data, elsewhere: the user home, as reported by `dirs`);
//! - a leading `~` expands to the user's home;
//! - a relative path is made absolute against the current directory.

use std::env;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HomeDirError {
    #[error("cannot determine the {0} directory for this platform")]
    NoPlatformDir(&'static str),

    #[error("cannot determine the current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    #[error("failed to create home directory {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn user_home() -> Result<PathBuf, HomeDirError> {
    dirs::home_dir().ok_or(HomeDirError::NoPlatformDir("user home"))
}

/// `%APPDATA%` on Windows, the user home elsewhere.
fn platform_base() -> Result<PathBuf, HomeDirError> {
    if cfg!(target_os = "windows") {
        dirs::config_dir().ok_or(HomeDirError::NoPlatformDir("roaming app data"))
    } else {
        user_home()
    }
}

fn expand_tilde(raw: &str) -> Result<PathBuf, HomeDirError> {
    if raw == "~" {
        return user_home();
    }
    if let Some(rest) = raw.strip_prefix("~/").or_else(|| raw.strip_prefix("~\\")) {
        return Ok(user_home()?.join(rest));
    }
    Ok(PathBuf::from(raw))
}

fn absolutize(path: PathBuf) -> Result<PathBuf, HomeDirError> {
    if path.is_absolute() {
        return Ok(path);
    }
    let cwd = env::current_dir().map_err(HomeDirError::CurrentDir)?;
    Ok(cwd.join(path))
}

/// Resolve the home directory and optionally create it.
pub fn resolve_home_dir(
    configured: Option<String>,
    default_subdir: &str,
    create: bool,
) -> Result<PathBuf, HomeDirError> {
    let path = match configured.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => absolutize(expand_tilde(raw)?)?,
        _ => absolutize(platform_base()?.join(default_subdir))?,
    };

    if create {
        ensure_dir(&path)?;
    }
    Ok(path)
}

fn ensure_dir(path: &Path) -> Result<(), HomeDirError> {
    std::fs::create_dir_all(path).map_err(|source| HomeDirError::Create {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn explicit_absolute_path_is_kept_and_created() {
        let tmp = tempdir().unwrap();
        let target = tmp.path().join("a").join("b");
        let resolved =
            resolve_home_dir(Some(target.to_string_lossy().to_string()), ".x", true).unwrap();
        assert_eq!(resolved, target);
        assert!(target.is_dir());
    }

    #[test]
    fn relative_path_becomes_absolute() {
        let resolved = resolve_home_dir(Some("some/rel/dir".into()), ".x", false).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("some/rel/dir"));
    }

    #[test]
    fn no_create_leaves_filesystem_alone() {
        let tmp = tempdir().unwrap();
        let target = tmp.path().join("not_created");
        resolve_home_dir(Some(target.to_string_lossy().to_string()), ".x", false).unwrap();
        assert!(!target.exists());
    }

    #[test]
    fn tilde_and_default_use_user_home() {
        let Some(home) = dirs::home_dir() else {
            return;
        };

        let resolved = resolve_home_dir(Some("~/.registry_test".into()), ".x", false).unwrap();
        assert!(resolved.starts_with(&home));
        assert!(resolved.ends_with(".registry_test"));

        assert_eq!(resolve_home_dir(Some("~".into()), ".x", false).unwrap(), home);

        let resolved = resolve_home_dir(None, ".marriage_registry", false).unwrap();
        assert_eq!(resolved, platform_base().unwrap().join(".marriage_registry"));
    }

    #[test]
    fn blank_value_falls_back_to_default() {
        if platform_base().is_err() {
            return;
        }
        let resolved = resolve_home_dir(Some("   ".into()), ".marriage_registry", false).unwrap();
        assert!(resolved.ends_with(".marriage_registry"));
    }
}
