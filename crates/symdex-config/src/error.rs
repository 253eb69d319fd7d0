//! Configuration errors.

use std::{io, path::PathBuf};

use thiserror::Error;
use toml::{de, ser};

/// Everything that can go wrong while locating, reading or resolving `.symdex.toml` files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config file exists but could not be read.
    #[error("cannot read {path}: {source}")]
    ReadFile {
        /// Config file path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A config file is not valid TOML or has unknown fields.
    #[error("invalid config {path}: {source}")]
    ParseToml {
        /// Config file path.
        path: PathBuf,
        /// Parser diagnostic.
        source: de::Error,
    },

    /// An `include` or `exclude` entry is not a valid glob.
    #[error("invalid artifact pattern '{pattern}': {source}")]
    InvalidPattern {
        /// Pattern as written in the config.
        pattern: String,
        /// Glob compiler diagnostic.
        source: globset::Error,
    },

    /// A `~` path was used but `$HOME` could not be determined.
    #[error("cannot expand '~': home directory is unknown")]
    NoHomeDirectory,

    /// The configured artifact directory could not be canonicalized.
    #[error("cannot resolve artifact directory {path}: {source}")]
    PathResolution {
        /// Directory as resolved against its config file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The configured artifact directory exists but is a file.
    #[error("artifact directory {path} is not a directory")]
    NotDirectory {
        /// Offending path.
        path: PathBuf,
    },

    /// Effective settings could not be rendered back to TOML.
    #[error("cannot render settings: {0}")]
    Serialize(#[source] ser::Error),
}
