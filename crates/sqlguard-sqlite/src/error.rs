//! Error types for query execution.

use thiserror::Error;

/// Failures reported by the database engine.
///
/// These happen after a query passed validation. The engine detail is kept
/// as the error source for logging; callers facing untrusted clients should
/// not forward it verbatim.
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// The engine rejected or failed to run a statement.
    #[error("query execution failed: {0}")]
    Execution(#[from] sqlx::Error),

    /// The database could not be opened.
    #[error("failed to open database '{url}': {source}")]
    Connect {
        /// The database URL that was used.
        url: String,
        /// The underlying error.
        #[source]
        source: sqlx::Error,
    },
}

/// Result type alias for execution.
pub type Result<T> = std::result::Result<T, ExecutionError>;
