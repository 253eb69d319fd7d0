//! Clap argument definitions for the `symdex` CLI.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use symdex_index::SymbolKind;

/// Parses a symbol kind name.
fn parse_kind(s: &str) -> Result<SymbolKind, String> {
    s.parse::<SymbolKind>().map_err(|e| e.to_string())
}

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "symdex")]
#[command(about = "Type-ahead symbol search over generated documentation")]
pub struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Explicit artifact selection, overriding the configured directory.
#[derive(Args, Debug, Clone, Default)]
pub struct ArtifactArgs {
    /// Load this artifact file instead of the configured directory (repeatable)
    #[arg(short = 'a', long = "artifact")]
    pub artifacts: Vec<PathBuf>,
}

/// Shared flags that control search parameters.
#[derive(Args, Debug, Clone, Default)]
pub struct SearchParamsArgs {
    /// Maximum grouped results per query [default: from config, or 20]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    #[command(flatten)]
    /// Kind filter.
    pub kinds: KindArgs,
}

/// Kind filter flags.
#[derive(Args, Debug, Clone, Default)]
pub struct KindArgs {
    /// Only show this symbol kind: type, member, file, namespace, function, other (repeatable)
    #[arg(short = 'k', long = "kind", value_parser = parse_kind)]
    pub kinds: Vec<SymbolKind>,
}

/// Arguments for `symdex search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Search queries (prefixes of symbol names)
    #[arg(required = true)]
    pub queries: Vec<String>,

    #[command(flatten)]
    /// Search parameter overrides.
    pub params: SearchParamsArgs,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    /// Artifact selection.
    pub artifacts: ArtifactArgs,
}

/// Arguments for `symdex check`.
#[derive(Args, Debug, Clone)]
pub struct CheckCommand {
    #[command(flatten)]
    /// Artifact selection.
    pub artifacts: ArtifactArgs,
}

/// Arguments for `symdex ls`.
#[derive(Args, Debug, Clone)]
pub struct LsCommand {
    #[command(flatten)]
    /// Kind filter.
    pub kinds: KindArgs,

    /// Show every location of each entry
    #[arg(short = 'l', long)]
    pub long: bool,

    #[command(flatten)]
    /// Artifact selection.
    pub artifacts: ArtifactArgs,
}

/// Arguments for `symdex typeahead`.
#[derive(Args, Debug, Clone)]
pub struct TypeaheadCommand {
    #[command(flatten)]
    /// Search parameter overrides.
    pub params: SearchParamsArgs,

    #[command(flatten)]
    /// Artifact selection.
    pub artifacts: ArtifactArgs,
}

/// Arguments for `symdex init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.symdex.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `symdex` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Search symbols by name prefix
    Search(SearchCommand),

    /// Load every artifact and report its contents; fails if search would be disabled
    Check(CheckCommand),

    /// List every indexed entry
    Ls(LsCommand),

    /// Read queries from stdin, one per line, and search each keystroke
    Typeahead(TypeaheadCommand),

    /// Initialize symdex configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,
}
