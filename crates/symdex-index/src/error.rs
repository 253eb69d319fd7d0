//! Error types for the symdex-index crate.

use std::{error, fmt, io, path::PathBuf};

use thiserror::Error;

/// Characters of source shown on either side of the error column.
const SNIPPET_RADIUS: usize = 40;

/// A syntax error in a raw artifact, with the position where it occurred.
///
/// Renders as a one-line summary followed by the offending source line and a caret under the
/// error column. Long lines are clipped to a window around the column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// Error message.
    pub message: String,
    /// Byte position in the artifact.
    pub position: usize,
    /// One-based line number of `position`.
    pub line: usize,
    /// One-based column (in characters) of `position`.
    pub column: usize,
    /// The offending source line, clipped around `column`.
    pub snippet: String,
    /// Character offset of the error within `snippet`.
    pub caret: usize,
}

impl SyntaxError {
    /// Creates a syntax error, deriving line, column and snippet from the input.
    pub fn new(message: impl Into<String>, position: usize, input: &str) -> Self {
        let position = position.min(input.len());
        let before = input.get(..position).unwrap_or(input);
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;

        let rest = input.get(position..).unwrap_or_default();
        let line_end = rest.find('\n').map_or(input.len(), |i| position + i);
        let source_line = input[line_start..line_end].trim_end_matches('\r');

        let skip = (column - 1).saturating_sub(SNIPPET_RADIUS);
        let snippet = source_line
            .chars()
            .skip(skip)
            .take(2 * SNIPPET_RADIUS)
            .collect();

        Self {
            message: message.into(),
            position,
            line,
            column,
            snippet,
            caret: column - 1 - skip,
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "line {}, column {}: {}", self.line, self.column, self.message)?;
        writeln!(f, "  {}", self.snippet)?;
        write!(f, "  {}^", " ".repeat(self.caret))
    }
}

impl error::Error for SyntaxError {}

/// The raw artifact could not be turned into a valid index.
///
/// Loading is all-or-nothing: when this error is returned no store exists, and the host is
/// expected to disable search rather than present an empty index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedIndexError {
    /// The artifact is not a well-formed literal.
    #[error("syntax error at {0}")]
    Syntax(#[from] SyntaxError),

    /// The top-level value is not an array of records.
    #[error("artifact is not an array of records")]
    NotAnArray,

    /// A record is not an array.
    #[error("record {record}: expected an array")]
    RecordNotArray {
        /// Zero-based record index.
        record: usize,
    },

    /// A record has no key, or its key is blank.
    #[error("record {record}: missing key")]
    MissingKey {
        /// Zero-based record index.
        record: usize,
    },

    /// A location group has no display name.
    #[error("record {record} ('{key}'): missing display name")]
    MissingDisplayName {
        /// Zero-based record index.
        record: usize,
        /// Normalized key of the record.
        key: String,
    },

    /// A record contributes no locations at all.
    #[error("record {record} ('{key}'): no locations")]
    NoLocations {
        /// Zero-based record index.
        record: usize,
        /// Normalized key of the record.
        key: String,
    },

    /// A location has an empty URL.
    #[error("record {record} ('{key}'): location {location} has an empty url")]
    EmptyUrl {
        /// Zero-based record index.
        record: usize,
        /// Normalized key of the record.
        key: String,
        /// Zero-based location index within the record.
        location: usize,
    },

    /// A key is not in normalized (trimmed, lowercase) form.
    #[error("record {record}: key '{key}' is not normalized")]
    UnnormalizedKey {
        /// Zero-based record index.
        record: usize,
        /// The offending key.
        key: String,
    },

    /// A field has the wrong type.
    #[error("record {record}: {field} must be {expected}")]
    InvalidField {
        /// Zero-based record index.
        record: usize,
        /// Name of the offending field.
        field: &'static str,
        /// Description of the expected type.
        expected: &'static str,
    },
}

/// Errors that can occur when loading artifacts into a store.
#[derive(Debug, Error)]
pub enum IndexError {
    /// Failed to read an artifact file.
    #[error("failed to read artifact {path}: {source}")]
    ReadFile {
        /// Path to the artifact.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// An artifact is malformed.
    #[error("malformed artifact {artifact}: {source}")]
    Malformed {
        /// Path or label identifying the artifact.
        artifact: String,
        /// What was wrong with it.
        source: MalformedIndexError,
    },

    /// Failed to walk the artifact directory.
    #[error("failed to scan {path}: {message}")]
    Walk {
        /// Directory being scanned.
        path: PathBuf,
        /// Error message.
        message: String,
    },
}

impl IndexError {
    /// Wraps a malformed-artifact error with the artifact's label.
    pub(crate) fn malformed(artifact: impl Into<String>, source: MalformedIndexError) -> Self {
        Self::Malformed {
            artifact: artifact.into(),
            source,
        }
    }
}
