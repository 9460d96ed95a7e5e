//! Error types for query construction and whitelist configuration.

use thiserror::Error;

use crate::operator::Operator;

/// A caller request that cannot be turned into a safe query.
///
/// Every variant is raised before any SQL text is formed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// The table is not in the table whitelist.
    #[error("table '{table}' not allowed; use one of: {}", .allowed.join(", "))]
    InvalidTable {
        /// The rejected table name.
        table: String,
        /// The whitelisted table names.
        allowed: Vec<String>,
    },

    /// The column is not in the whitelist of its table.
    #[error("column '{column}' not allowed for table '{table}'; use one of: {}", .allowed.join(", "))]
    InvalidColumn {
        /// The (valid) table the column was requested on.
        table: String,
        /// The rejected column name.
        column: String,
        /// The whitelisted columns of the table.
        allowed: Vec<String>,
    },

    /// The operator is not in the operator whitelist.
    #[error("operator '{operator}' not allowed; use one of: {}", .allowed.join(", "))]
    InvalidOperator {
        /// The rejected operator.
        operator: String,
        /// The accepted operators.
        allowed: Vec<String>,
    },

    /// The value does not fit the operator.
    #[error("invalid value for operator {operator}: {reason}")]
    InvalidValue {
        /// The operator the value was supplied for.
        operator: Operator,
        /// Why the value was rejected.
        reason: &'static str,
    },
}

/// Errors raised while building a whitelist.
#[derive(Debug, Error)]
pub enum WhitelistError {
    /// A table or column name is not a plain SQL identifier.
    #[error("invalid {kind} identifier '{name}'")]
    InvalidIdentifier {
        /// "table" or "column".
        kind: &'static str,
        /// The offending name.
        name: String,
    },

    /// The same table was declared twice.
    #[error("table '{0}' declared more than once")]
    DuplicateTable(String),

    /// A table was declared without any columns.
    #[error("table '{0}' declares no columns")]
    EmptyTable(String),

    /// The whitelist document could not be parsed.
    #[error("invalid whitelist document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for query construction.
pub type Result<T> = std::result::Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_allowed_set() {
        let err = QueryError::InvalidTable {
            table: String::from("secrets"),
            allowed: vec![String::from("users"), String::from("products")],
        };
        assert_eq!(
            err.to_string(),
            "table 'secrets' not allowed; use one of: users, products"
        );

        let err = QueryError::InvalidColumn {
            table: String::from("users"),
            column: String::from("password"),
            allowed: vec![String::from("id"), String::from("email")],
        };
        assert_eq!(
            err.to_string(),
            "column 'password' not allowed for table 'users'; use one of: id, email"
        );
    }
}
