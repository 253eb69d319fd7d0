//! Locating config files and generated search directories.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::BaseDirs;

use crate::parse::is_root_config;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".symdex.toml";

/// Lists the config files that apply to `cwd`, nearest first.
///
/// Every ancestor of `cwd` holding a `.symdex.toml` contributes one file. A file with
/// `root = true` ends the list; otherwise `~/.symdex.toml` is appended last when it exists.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut configs = Vec::new();

    for candidate in cwd.ancestors().map(|dir| dir.join(CONFIG_FILENAME)) {
        if !candidate.is_file() {
            continue;
        }
        let stop = is_root_config(&candidate);
        configs.push(candidate);
        if stop {
            return configs;
        }
    }

    if let Some(global) = global_config_path().filter(|g| g.is_file())
        && !configs.contains(&global)
    {
        configs.push(global);
    }
    configs
}

/// Returns the path to the global configuration file (`~/.symdex.toml`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// Places documentation generators commonly write their HTML search data, relative to the
/// project root.
const SEARCH_DIR_CANDIDATES: &[&str] = &[
    "doc/html/search",
    "docs/html/search",
    "html/search",
    "build/doc/html/search",
    "build/docs/html/search",
];

/// Finds a generated search directory under `root`.
///
/// Returns the first candidate, relative to `root`, that contains at least one `all_*.js`
/// artifact.
pub fn detect_search_dir(root: &Path) -> Option<&'static str> {
    SEARCH_DIR_CANDIDATES
        .iter()
        .copied()
        .find(|candidate| has_artifacts(&root.join(candidate)))
}

/// Checks whether `dir` holds any `all_*.js` file.
fn has_artifacts(dir: &Path) -> bool {
    let Ok(entries) = fs::read_dir(dir) else {
        return false;
    };
    entries.flatten().any(|entry| {
        entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with("all_") && name.ends_with(".js"))
    })
}

/// Checks if a path is the global configuration file.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| path == global)
}
