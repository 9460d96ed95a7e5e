//! Request-level errors and their HTTP mapping.

use sqlguard_core::QueryError;
use sqlguard_sqlite::ExecutionError;
use thiserror::Error;
use tracing::error;

use crate::http::Response;

/// Anything that stops a request from producing rows.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The caller asked for something outside the whitelist.
    #[error(transparent)]
    Query(#[from] QueryError),

    /// A query-string parameter is missing or malformed.
    #[error("invalid parameter '{name}': {reason}")]
    BadParameter {
        /// Parameter name.
        name: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// The database failed after validation passed.
    #[error(transparent)]
    Execution(#[from] ExecutionError),
}

impl ApiError {
    /// Shorthand for a missing required parameter.
    pub fn missing(name: &'static str) -> Self {
        Self::BadParameter {
            name,
            reason: String::from("required"),
        }
    }

    /// HTTP status for this error.
    pub const fn status(&self) -> u16 {
        match self {
            Self::Query(_) | Self::BadParameter { .. } => 400,
            Self::Execution(_) => 500,
        }
    }

    /// Converts the error into a JSON response.
    ///
    /// Client errors echo their message. Execution errors are logged here
    /// and answered with a generic body.
    pub fn into_response(self) -> Response {
        match self {
            Self::Execution(err) => {
                error!(error = %err, "Query execution failed");
                Response::internal_server_error()
            }
            other => Response::error(other.status(), other.to_string()),
        }
    }
}

/// Result type alias for handlers.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_error_is_400_with_allowed_set() {
        let err = ApiError::from(QueryError::InvalidTable {
            table: String::from("secrets"),
            allowed: vec![String::from("users"), String::from("products")],
        });
        let res = err.into_response();
        assert_eq!(res.status, 400);
        assert_eq!(
            res.json_body().unwrap()["error"],
            "table 'secrets' not allowed; use one of: users, products"
        );
    }

    #[test]
    fn test_bad_parameter_is_400() {
        let res = ApiError::missing("table").into_response();
        assert_eq!(res.status, 400);
        assert_eq!(
            res.json_body().unwrap()["error"],
            "invalid parameter 'table': required"
        );
    }

    #[test]
    fn test_execution_error_hides_detail() {
        let err = ApiError::from(ExecutionError::Execution(sqlx::Error::RowNotFound));
        let res = err.into_response();
        assert_eq!(res.status, 500);
        assert_eq!(res.json_body().unwrap()["error"], "internal server error");
    }
}
