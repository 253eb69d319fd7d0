//! Artifact discovery.
//!
//! Walks the configured artifact directory to find the search data files to load,
//! applying include/exclude patterns and skipping hidden entries and symlinks. An unreadable
//! entry fails the scan.

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use symdex_config::CompiledPatterns;
use tracing::debug;
use walkdir::WalkDir;

use crate::IndexError;

/// Discovers artifact files under `dir`.
///
/// Any entry that cannot be read fails the whole scan: loading a subset of the artifacts
/// would silently produce a partial index.
///
/// Returns absolute paths sorted by their path relative to `dir`, so the load order (and with
/// it the original-order tie-break in search ranking) is deterministic.
pub fn discover_artifacts(dir: &Path, patterns: &CompiledPatterns) -> Result<Vec<PathBuf>, IndexError> {
    if !dir.is_dir() {
        return Err(IndexError::Walk {
            path: dir.to_path_buf(),
            message: "not a directory".to_string(),
        });
    }

    let mut found: Vec<(PathBuf, PathBuf)> = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()))
    {
        let entry = entry.map_err(|e| walk_error(dir, &e))?;

        if !entry.file_type().is_file() {
            continue;
        }

        let abs_path = entry.path().to_path_buf();
        let Ok(rel_path) = abs_path.strip_prefix(dir).map(Path::to_path_buf) else {
            continue;
        };

        if patterns.matches(&rel_path) {
            found.push((rel_path, abs_path));
        }
    }

    found.sort();
    debug!(dir = %dir.display(), count = found.len(), "discovered artifacts");

    Ok(found.into_iter().map(|(_, abs)| abs).collect())
}

/// Converts a walk failure into an error naming the unreadable path.
fn walk_error(dir: &Path, error: &walkdir::Error) -> IndexError {
    let message = error
        .io_error()
        .map_or_else(|| error.to_string(), ToString::to_string);
    IndexError::Walk {
        path: error.path().unwrap_or(dir).to_path_buf(),
        message,
    }
}

/// Checks if a filename represents a hidden file (starts with '.').
fn is_hidden(name: &OsStr) -> bool {
    name.to_str().is_some_and(|s| s.starts_with('.'))
}
