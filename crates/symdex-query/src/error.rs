//! Error types for query execution.

use thiserror::Error;

/// Errors returned by search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A search argument is out of range.
    #[error("invalid argument '{name}': {message}")]
    InvalidArgument {
        /// Name of the offending argument.
        name: &'static str,
        /// What is wrong with it.
        message: String,
    },
}

impl QueryError {
    /// Error for a result limit of zero.
    pub(crate) fn zero_limit() -> Self {
        Self::InvalidArgument {
            name: "limit",
            message: "must be at least 1".to_string(),
        }
    }
}
