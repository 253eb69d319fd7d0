//! `.symdex.toml` configuration.
//!
//! Settings come from every `.symdex.toml` between the working directory and the filesystem
//! root, nearest first, followed by `~/.symdex.toml`. A file with `root = true` cuts the chain
//! short. The merged result says where the generated search artifacts live and how searches
//! behave by default.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod patterns;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{
    CONFIG_FILENAME, detect_search_dir, discover_config_files, global_config_path,
    is_global_config,
};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawArtifactSettings, RawConfig, RawSearchSettings, parse_config_file, parse_config_str,
};
pub use patterns::CompiledPatterns;
pub use resolve::resolve_dir;
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template, local_template_for};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Default grouped result limit per query.
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Include patterns used when none are configured.
pub const DEFAULT_INCLUDE_PATTERNS: &[&str] = &["all_*.js"];

/// Effective settings after every applicable `.symdex.toml` has been merged.
///
/// Nearer files win field by field; anything no file sets keeps its default.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// `[search]` settings.
    pub search: SearchSettings,
    /// `[artifacts]` settings.
    pub artifacts: ArtifactSettings,
    /// Directory of the nearest config file, if any was found.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Discovers the config files for `cwd` and merges them.
    ///
    /// With no config files at all this is [`Config::default`].
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        Self::load_from_files(&discover_config_files(cwd))
    }

    /// Parses and merges `files`, nearest (highest precedence) first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        let mut parsed = Vec::with_capacity(files.len());
        for path in files {
            parsed.push(ParsedConfig {
                path: path.clone(),
                config: parse_config_file(path)?,
            });
        }
        merge_configs(&parsed)
    }

    /// Compiles the artifact include/exclude patterns.
    pub fn compile_patterns(&self) -> Result<CompiledPatterns, ConfigError> {
        CompiledPatterns::compile(&self.artifacts)
    }

    /// Checks the settings for problems that do not stop loading.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Renders the effective settings as TOML, as shown by `symdex config`.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            search: self.search.clone(),
            artifacts: SerializableArtifactSettings::from(&self.artifacts),
        };
        toml::to_string_pretty(&serializable).map_err(ConfigError::Serialize)
    }
}

/// Search-related settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Maximum grouped results per query.
    pub limit: usize,
    /// Symbol kinds admitted by default. Empty admits every kind.
    pub kinds: Vec<String>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            limit: DEFAULT_SEARCH_LIMIT,
            kinds: Vec::new(),
        }
    }
}

/// Location and selection of the generated search artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSettings {
    /// Resolved absolute directory holding the artifacts, if configured.
    pub dir: Option<PathBuf>,
    /// Include patterns, relative to `dir`.
    pub include: Vec<String>,
    /// Exclude patterns, relative to `dir`.
    pub exclude: Vec<String>,
}

impl Default for ArtifactSettings {
    fn default() -> Self {
        Self {
            dir: None,
            include: DEFAULT_INCLUDE_PATTERNS
                .iter()
                .map(ToString::to_string)
                .collect(),
            exclude: Vec::new(),
        }
    }
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings {
    /// Search settings.
    search: SearchSettings,
    /// Artifact settings.
    artifacts: SerializableArtifactSettings,
}

/// Artifact settings with the directory rendered as a string.
#[derive(Serialize)]
struct SerializableArtifactSettings {
    /// Artifact directory, omitted when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    dir: Option<String>,
    /// Include patterns.
    include: Vec<String>,
    /// Exclude patterns.
    exclude: Vec<String>,
}

impl From<&ArtifactSettings> for SerializableArtifactSettings {
    fn from(artifacts: &ArtifactSettings) -> Self {
        Self {
            dir: artifacts.dir.as_ref().map(|d| d.display().to_string()),
            include: artifacts.include.clone(),
            exclude: artifacts.exclude.clone(),
        }
    }
}
