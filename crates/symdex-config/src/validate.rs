//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::{fmt, fs, path::Path};

use globset::{Glob, GlobMatcher};

use crate::Config;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// No artifact directory is configured.
    NoArtifactDirectory,
    /// An include pattern doesn't match any file in the artifact directory.
    IncludePatternMatchesNothing {
        /// Pattern that matched nothing.
        pattern: String,
    },
    /// The default search limit is zero, so every search would be rejected.
    ZeroSearchLimit,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoArtifactDirectory => {
                write!(f, "no artifact directory is configured")
            }
            Self::IncludePatternMatchesNothing { pattern } => {
                write!(f, "include pattern '{pattern}' matches no artifact files")
            }
            Self::ZeroSearchLimit => {
                write!(f, "search limit is 0; searches will be rejected")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if config.search.limit == 0 {
        warnings.push(ConfigWarning::ZeroSearchLimit);
    }

    let Some(dir) = &config.artifacts.dir else {
        warnings.push(ConfigWarning::NoArtifactDirectory);
        return warnings;
    };

    for pattern in &config.artifacts.include {
        if !pattern_matches_any_file(dir, pattern) {
            warnings.push(ConfigWarning::IncludePatternMatchesNothing {
                pattern: pattern.clone(),
            });
        }
    }

    warnings
}

/// Checks if a glob pattern matches any file in a directory.
fn pattern_matches_any_file(dir: &Path, pattern: &str) -> bool {
    let Ok(glob) = Glob::new(pattern) else {
        return false; // Invalid pattern, reported when compiling
    };
    let matcher = glob.compile_matcher();
    walk_and_match(dir, dir, &matcher)
}

/// Recursively walks a directory and checks if any file matches the pattern.
fn walk_and_match(root: &Path, current: &Path, matcher: &GlobMatcher) -> bool {
    let Ok(entries) = fs::read_dir(current) else {
        return false;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };

        if path.is_dir() {
            if walk_and_match(root, &path, matcher) {
                return true;
            }
        } else if matcher.is_match(relative) {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ArtifactSettings, SearchSettings, test_support::TestDir};

    #[test]
    fn warns_without_artifact_directory() {
        let warnings = validate_config(&Config::default());
        assert_eq!(warnings, vec![ConfigWarning::NoArtifactDirectory]);
    }

    #[test]
    fn warns_on_zero_limit() {
        let config = Config {
            search: SearchSettings {
                limit: 0,
                kinds: vec![],
            },
            ..Config::default()
        };
        assert!(validate_config(&config).contains(&ConfigWarning::ZeroSearchLimit));
    }

    #[test]
    fn warns_on_unmatched_include() {
        let test_dir = TestDir::new();
        test_dir.create_artifact("search/all_0.js");

        let config = Config {
            artifacts: ArtifactSettings {
                dir: Some(test_dir.path().join("search")),
                include: vec!["all_*.js".into(), "classes_*.js".into()],
                exclude: vec![],
            },
            ..Config::default()
        };

        assert_eq!(
            validate_config(&config),
            vec![ConfigWarning::IncludePatternMatchesNothing {
                pattern: "classes_*.js".into()
            }]
        );
    }

    #[test]
    fn warning_display() {
        let warning = ConfigWarning::IncludePatternMatchesNothing {
            pattern: "x.js".into(),
        };
        assert_eq!(
            warning.to_string(),
            "include pattern 'x.js' matches no artifact files"
        );
    }
}
