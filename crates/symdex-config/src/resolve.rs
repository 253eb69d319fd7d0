//! Resolution of the configured artifact directory.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::ConfigError;

/// Turns an `[artifacts] dir` value into a canonical directory path.
///
/// `~` and `~/...` expand against the home directory. Other relative values are taken relative
/// to `config_dir`, the directory holding the config file that set them. The result must name
/// an existing directory.
pub fn resolve_dir(path: &str, config_dir: &Path) -> Result<PathBuf, ConfigError> {
    let candidate = match expand_tilde(path)? {
        expanded if expanded.is_absolute() => expanded,
        relative => config_dir.join(relative),
    };

    let canonical = candidate
        .canonicalize()
        .map_err(|source| ConfigError::PathResolution {
            path: candidate,
            source,
        })?;

    if canonical.is_dir() {
        Ok(canonical)
    } else {
        Err(ConfigError::NotDirectory { path: canonical })
    }
}

/// Replaces a leading `~` component with the home directory.
fn expand_tilde(path: &str) -> Result<PathBuf, ConfigError> {
    match path.strip_prefix('~') {
        Some("") => home_dir(),
        Some(rest) if rest.starts_with('/') => Ok(home_dir()?.join(&rest[1..])),
        _ => Ok(PathBuf::from(path)),
    }
}

/// The current user's home directory.
fn home_dir() -> Result<PathBuf, ConfigError> {
    let dirs = BaseDirs::new().ok_or(ConfigError::NoHomeDirectory)?;
    Ok(dirs.home_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestDir;

    #[test]
    fn test_resolve_relative_path() {
        let test_dir = TestDir::new();
        let search = test_dir.create_dir("doc/html/search");

        let resolved = resolve_dir("./doc/html/search", test_dir.path()).unwrap();
        assert_eq!(resolved, search.canonicalize().unwrap());
    }

    #[test]
    fn test_resolve_parent_relative_path() {
        let test_dir = TestDir::new();
        let shared = test_dir.create_dir("shared/search");
        let project = test_dir.create_dir("project");

        let resolved = resolve_dir("../shared/search", &project).unwrap();
        assert_eq!(resolved, shared.canonicalize().unwrap());
    }

    #[test]
    fn test_resolve_absolute_path() {
        let test_dir = TestDir::new();
        let search = test_dir.create_dir("search");
        let absolute = search.canonicalize().unwrap();

        let resolved = resolve_dir(absolute.to_str().unwrap(), Path::new("/elsewhere")).unwrap();
        assert_eq!(resolved, absolute);
    }

    #[test]
    fn test_resolve_missing_path() {
        let test_dir = TestDir::new();
        let err = resolve_dir("missing", test_dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::PathResolution { .. }));
    }

    #[test]
    fn test_resolve_file_is_not_directory() {
        let test_dir = TestDir::new();
        test_dir.create_artifact("all_0.js");

        let err = resolve_dir("all_0.js", test_dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::NotDirectory { .. }));
    }

    #[test]
    fn test_expand_tilde_passthrough() {
        assert_eq!(expand_tilde("docs").unwrap(), PathBuf::from("docs"));
        assert_eq!(expand_tilde("~user/x").unwrap(), PathBuf::from("~user/x"));
    }
}
