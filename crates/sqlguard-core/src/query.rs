//! The validated query artifact.

use std::fmt;

use crate::value::{FilterValue, SqlValue};

/// A SQL template and its ordered bound parameters.
///
/// Only [`QueryBuilder`](crate::QueryBuilder) can create a `Query`, so
/// holding one means every identifier in the template came from the
/// whitelist and every caller value sits behind a `?` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    sql: String,
    params: Vec<SqlValue>,
}

impl Query {
    pub(crate) const fn new(sql: String, params: Vec<SqlValue>) -> Self {
        Self { sql, params }
    }

    /// Returns the SQL template.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Returns the bound parameters in placeholder order.
    #[must_use]
    pub fn params(&self) -> &[SqlValue] {
        &self.params
    }
}

impl fmt::Display for Query {
    /// Shows the template only; parameter values are never rendered.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

/// One caller-supplied filter condition, not yet validated.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    /// Column to filter on.
    pub column: String,
    /// Operator, as supplied by the caller.
    pub operator: String,
    /// Right-hand side value.
    pub value: FilterValue,
}

impl Condition {
    /// Creates a new condition.
    pub fn new(
        column: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<FilterValue>,
    ) -> Self {
        Self {
            column: column.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }
}
