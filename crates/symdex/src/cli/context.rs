//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Arc,
};

use symdex_config::Config;
use symdex_index::{IndexError, IndexStore, SymbolKind, discover_artifacts};
use symdex_query::SearchParams;
use tracing::debug;

use crate::cli::args::{ArtifactArgs, SearchParamsArgs};

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
    /// Store loaded for this invocation.
    store: Option<Arc<IndexStore>>,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self {
            cwd,
            config,
            store: None,
        })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used for `init`, which should work even when an existing config file is invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
            store: None,
        })
    }

    /// Resolves the artifact files to load.
    ///
    /// Explicit `--artifact` paths win; otherwise the configured directory is scanned.
    pub fn artifact_paths(&self, args: &ArtifactArgs) -> Result<Vec<PathBuf>, ExitCode> {
        if !args.artifacts.is_empty() {
            return Ok(args.artifacts.iter().map(|p| self.cwd.join(p)).collect());
        }

        let Some(dir) = &self.config.artifacts.dir else {
            eprintln!("error: no artifact directory configured");
            eprintln!(
                "Run 'symdex init' and set [artifacts] dir, or pass --artifact <FILE>."
            );
            return Err(ExitCode::FAILURE);
        };

        let patterns = self.config.compile_patterns().map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        })?;

        let paths = discover_artifacts(dir, &patterns).map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        })?;

        if paths.is_empty() {
            eprintln!("error: no artifacts found in {}", dir.display());
            return Err(ExitCode::FAILURE);
        }
        Ok(paths)
    }

    /// Returns the loaded store, loading it on first use.
    ///
    /// A malformed artifact disables search: the degraded-mode notice is printed and no store
    /// is returned.
    pub fn store(&mut self, args: &ArtifactArgs) -> Result<Arc<IndexStore>, ExitCode> {
        if let Some(store) = &self.store {
            return Ok(Arc::clone(store));
        }

        let paths = self.artifact_paths(args)?;
        let store = Arc::new(load_store_or_failure(&paths)?);
        debug!(artifacts = paths.len(), entries = store.len(), "index ready");
        self.store = Some(Arc::clone(&store));
        Ok(store)
    }

    /// Builds search parameters from CLI overrides and configured defaults.
    pub fn search_params(&self, args: &SearchParamsArgs) -> Result<SearchParams, ExitCode> {
        let limit = args.limit.unwrap_or(self.config.search.limit);
        let kinds = if args.kinds.kinds.is_empty() {
            self.configured_kinds()?
        } else {
            args.kinds.kinds.clone()
        };
        Ok(SearchParams::default().with_limit(limit).with_kinds(kinds))
    }

    /// Parses the configured default kind filter.
    pub fn configured_kinds(&self) -> Result<Vec<SymbolKind>, ExitCode> {
        self.config
            .search
            .kinds
            .iter()
            .map(|name| name.parse::<SymbolKind>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                eprintln!("error: invalid [search] kinds: {e}");
                ExitCode::FAILURE
            })
    }
}

/// Prints the notice shown when search has to be disabled.
pub fn report_search_disabled(error: &IndexError) {
    eprintln!("search disabled: {error}");
}

/// Loads artifacts into a store, failing closed on any error.
fn load_store_or_failure(paths: &[PathBuf]) -> Result<IndexStore, ExitCode> {
    IndexStore::load_files(paths).map_err(|e| {
        report_search_disabled(&e);
        ExitCode::FAILURE
    })
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
