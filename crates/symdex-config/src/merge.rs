//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules and resolving paths.

use std::path::{Path, PathBuf};

use crate::{
    ArtifactSettings, Config, ConfigError, SearchSettings,
    parse::{RawConfig, RawSearchSettings},
    resolve::resolve_dir,
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

impl ParsedConfig {
    /// Directory containing the config file, used to resolve relative paths.
    fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Every field is merged independently: the first config that defines it wins. A relative
/// artifact `dir` is resolved against the directory of the file that declares it.
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let search = merge_search_settings(configs);
    let artifacts = merge_artifact_settings(configs)?;
    let config_root = configs.first().map(|c| c.dir().to_path_buf());

    Ok(Config {
        search,
        artifacts,
        config_root,
    })
}

/// Merges search settings.
fn merge_search_settings(configs: &[ParsedConfig]) -> SearchSettings {
    let mut result = SearchSettings::default();

    // Lowest precedence first so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref search) = parsed.config.search {
            apply_raw_search(&mut result, search);
        }
    }

    result
}

/// Applies raw search settings to result, overwriting any present values.
fn apply_raw_search(result: &mut SearchSettings, raw: &RawSearchSettings) {
    if let Some(v) = raw.limit {
        result.limit = v;
    }
    if let Some(ref v) = raw.kinds {
        result.kinds = v.clone();
    }
}

/// Merges artifact settings.
///
/// Only the winning `dir` is resolved, so a stale directory in a shadowed (for example global)
/// config does not break a project that overrides it.
fn merge_artifact_settings(configs: &[ParsedConfig]) -> Result<ArtifactSettings, ConfigError> {
    let mut result = ArtifactSettings::default();
    let raw = || configs.iter().filter_map(|p| p.config.artifacts.as_ref().map(|a| (p, a)));

    if let Some((parsed, dir)) = raw().find_map(|(p, a)| a.dir.as_ref().map(|d| (p, d))) {
        result.dir = Some(resolve_dir(dir, parsed.dir())?);
    }
    if let Some(include) = raw().find_map(|(_, a)| a.include.clone()) {
        result.include = include;
    }
    if let Some(exclude) = raw().find_map(|(_, a)| a.exclude.clone()) {
        result.exclude = exclude;
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse::parse_config, test_support::TestDir};

    /// Builds a `ParsedConfig` from TOML content at a fake path.
    fn parsed(path: PathBuf, toml: &str) -> ParsedConfig {
        ParsedConfig {
            path,
            config: parse_config(toml).unwrap(),
        }
    }

    #[test]
    fn test_merge_empty() {
        let config = merge_configs(&[]).unwrap();
        assert_eq!(config.search, SearchSettings::default());
        assert!(config.config_root.is_none());
    }

    #[test]
    fn test_merge_first_definition_wins() {
        let test_dir = TestDir::new();
        let configs = vec![
            parsed(
                test_dir.path().join("project/.symdex.toml"),
                "[search]\nlimit = 5\n",
            ),
            parsed(
                test_dir.path().join(".symdex.toml"),
                "[search]\nlimit = 50\nkinds = [\"type\"]\n",
            ),
        ];

        let config = merge_configs(&configs).unwrap();
        assert_eq!(config.search.limit, 5);
        assert_eq!(config.search.kinds, vec!["type"]);
        assert_eq!(config.config_root, Some(test_dir.path().join("project")));
    }

    #[test]
    fn test_merge_resolves_dir_relative_to_declaring_file() {
        let test_dir = TestDir::new();
        let search = test_dir.create_dir("outer/doc/search");
        test_dir.create_dir("outer/inner");

        let configs = vec![
            parsed(
                test_dir.path().join("outer/inner/.symdex.toml"),
                "[artifacts]\ninclude = \"*.js\"\n",
            ),
            parsed(
                test_dir.path().join("outer/.symdex.toml"),
                "[artifacts]\ndir = \"doc/search\"\n",
            ),
        ];

        let config = merge_configs(&configs).unwrap();
        assert_eq!(config.artifacts.dir, Some(search.canonicalize().unwrap()));
        assert_eq!(config.artifacts.include, vec!["*.js"]);
    }

    #[test]
    fn test_merge_ignores_shadowed_dir() {
        let test_dir = TestDir::new();
        let search = test_dir.create_dir("project/search");

        let configs = vec![
            parsed(
                test_dir.path().join("project/.symdex.toml"),
                "[artifacts]\ndir = \"search\"\n",
            ),
            parsed(
                test_dir.path().join(".symdex.toml"),
                "[artifacts]\ndir = \"gone\"\nexclude = [\"all_0.js\"]\n",
            ),
        ];

        let config = merge_configs(&configs).unwrap();
        assert_eq!(config.artifacts.dir, Some(search.canonicalize().unwrap()));
        assert_eq!(config.artifacts.exclude, vec!["all_0.js"]);
    }

    #[test]
    fn test_merge_missing_dir_is_error() {
        let test_dir = TestDir::new();
        let configs = vec![parsed(
            test_dir.path().join(".symdex.toml"),
            "[artifacts]\ndir = \"nope\"\n",
        )];

        assert!(matches!(
            merge_configs(&configs),
            Err(ConfigError::PathResolution { .. })
        ));
    }
}
