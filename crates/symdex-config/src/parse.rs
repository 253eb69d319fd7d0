//! Reading a single `.symdex.toml`.
//!
//! Every field is optional at this stage; defaults are applied only once all discovered files
//! have been merged.

use std::{fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};

use crate::ConfigError;

/// One config file exactly as written.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawConfig {
    /// `root = true` ends discovery at this file.
    pub root: Option<bool>,
    /// The `[search]` table.
    pub search: Option<RawSearchSettings>,
    /// The `[artifacts]` table.
    pub artifacts: Option<RawArtifactSettings>,
}

/// The `[search]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawSearchSettings {
    /// Grouped results returned per query.
    pub limit: Option<usize>,
    /// Kind names results are restricted to.
    pub kinds: Option<Vec<String>>,
}

/// The `[artifacts]` table.
///
/// `include` and `exclude` take a single glob or a list of globs.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawArtifactSettings {
    /// Search data directory, relative to the file that sets it.
    pub dir: Option<String>,
    /// Artifact file globs to load.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub include: Option<Vec<String>>,
    /// Artifact file globs to skip.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub exclude: Option<Vec<String>>,
}

/// Reads and parses the config file at `path`.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    match fs::read_to_string(path) {
        Ok(contents) => parse_config_str(&contents, path),
        Err(source) => Err(ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Parses config text; `path` only labels errors.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses config text that is expected to be valid.
#[cfg(test)]
pub fn parse_config(contents: &str) -> Result<RawConfig, toml::de::Error> {
    toml::from_str(contents)
}

/// Whether the file at `path` sets `root = true`.
///
/// Unreadable or invalid files count as non-root; loading reports them properly later.
pub fn is_root_config(path: &Path) -> bool {
    parse_config_file(path).is_ok_and(|config| config.root == Some(true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config_str("", Path::new("test.toml")).unwrap();
        assert!(config.root.is_none());
        assert!(config.search.is_none());
        assert!(config.artifacts.is_none());
    }

    #[test]
    fn test_parse_search_settings() {
        let toml = r#"
[search]
limit = 5
kinds = ["type", "function"]
"#;
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        let search = config.search.unwrap();
        assert_eq!(search.limit, Some(5));
        assert_eq!(
            search.kinds,
            Some(vec!["type".to_string(), "function".to_string()])
        );
    }

    #[test]
    fn test_parse_artifacts_single_include() {
        let toml = r#"
[artifacts]
dir = "doc/html/search"
include = "all_*.js"
"#;
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        let artifacts = config.artifacts.unwrap();
        assert_eq!(artifacts.dir.as_deref(), Some("doc/html/search"));
        assert_eq!(artifacts.include, Some(vec!["all_*.js".to_string()]));
        assert!(artifacts.exclude.is_none());
    }

    #[test]
    fn test_parse_artifacts_pattern_lists() {
        let toml = r#"
[artifacts]
include = ["all_*.js", "classes_*.js"]
exclude = ["all_f.js"]
"#;
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        let artifacts = config.artifacts.unwrap();
        assert_eq!(
            artifacts.include,
            Some(vec!["all_*.js".to_string(), "classes_*.js".to_string()])
        );
        assert_eq!(artifacts.exclude, Some(vec!["all_f.js".to_string()]));
    }

    #[test]
    fn test_parse_root_flag() {
        let config = parse_config_str("root = true\n", Path::new("test.toml")).unwrap();
        assert_eq!(config.root, Some(true));
    }

    #[test]
    fn test_parse_unknown_field_is_error() {
        let toml = r#"
[search]
stemmer = "english"
"#;
        let err = parse_config_str(toml, Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_parse_invalid_toml() {
        assert!(parse_config("[search\nlimit = 1").is_err());
    }
}
