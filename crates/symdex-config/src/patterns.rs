//! Include/exclude pattern compilation and matching.
//!
//! Compiles the artifact glob patterns into efficient matchers used during
//! artifact discovery.

use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::{ArtifactSettings, ConfigError};

/// Compiled glob patterns for artifact file matching.
#[derive(Debug)]
pub struct CompiledPatterns {
    /// Compiled include patterns.
    include: GlobSet,
    /// Compiled exclude patterns.
    exclude: GlobSet,
}

impl CompiledPatterns {
    /// Compiles include/exclude patterns from artifact settings.
    pub fn compile(artifacts: &ArtifactSettings) -> Result<Self, ConfigError> {
        Ok(Self {
            include: build_set(&artifacts.include, "include")?,
            exclude: build_set(&artifacts.exclude, "exclude")?,
        })
    }

    /// Checks if a path relative to the artifact directory should be loaded.
    ///
    /// A file matches if it matches at least one include pattern and no exclude pattern.
    pub fn matches(&self, path: &Path) -> bool {
        self.include.is_match(path) && !self.exclude.is_match(path)
    }
}

/// Builds a glob set from a list of patterns.
fn build_set(patterns: &[String], label: &str) -> Result<GlobSet, ConfigError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(compile_glob(pattern)?);
    }
    builder.build().map_err(|e| ConfigError::InvalidPattern {
        pattern: format!("<combined {label} patterns>"),
        source: e,
    })
}

/// Compiles a single glob pattern.
fn compile_glob(pattern: &str) -> Result<Glob, ConfigError> {
    Glob::new(pattern).map_err(|e| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds artifact settings from include and exclude lists.
    fn settings(include: &[&str], exclude: &[&str]) -> ArtifactSettings {
        ArtifactSettings {
            dir: None,
            include: include.iter().map(ToString::to_string).collect(),
            exclude: exclude.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn default_patterns_match_all_files() {
        let patterns = CompiledPatterns::compile(&ArtifactSettings::default()).unwrap();
        assert!(patterns.matches(Path::new("all_0.js")));
        assert!(patterns.matches(Path::new("all_e.js")));
        assert!(!patterns.matches(Path::new("classes_0.js")));
        assert!(!patterns.matches(Path::new("search.js")));
    }

    #[test]
    fn exclude_overrides_include() {
        let patterns = CompiledPatterns::compile(&settings(&["*.js"], &["search*.js"])).unwrap();
        assert!(patterns.matches(Path::new("functions_1.js")));
        assert!(!patterns.matches(Path::new("searchdata.js")));
    }

    #[test]
    fn empty_include_matches_nothing() {
        let patterns = CompiledPatterns::compile(&settings(&[], &[])).unwrap();
        assert!(!patterns.matches(Path::new("all_0.js")));
    }

    #[test]
    fn invalid_pattern_is_error() {
        let err = CompiledPatterns::compile(&settings(&["all_[.js"], &[])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { pattern, .. } if pattern == "all_[.js"));
    }
}
