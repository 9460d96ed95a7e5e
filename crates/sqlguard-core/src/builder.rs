//! Whitelist-validated query construction.
//!
//! # Example
//!
//! ```rust
//! use sqlguard_core::{build_filter_query, build_search_query, SqlValue};
//!
//! let query = build_filter_query("products", "price", ">=", 700).unwrap();
//! assert_eq!(query.sql(), "SELECT * FROM products WHERE price >= ?");
//! assert_eq!(query.params(), &[SqlValue::Int(700)]);
//!
//! let query = build_search_query("users", "' OR '1'='1").unwrap();
//! assert_eq!(query.sql(), "SELECT * FROM users WHERE name LIKE ?");
//! assert_eq!(query.params(), &[SqlValue::Text(String::from("%' OR '1'='1%"))]);
//! ```

use crate::error::{QueryError, Result};
use crate::operator::Operator;
use crate::query::{Condition, Query};
use crate::value::{FilterValue, SqlValue};
use crate::whitelist::{Table, Whitelist};

/// Column matched by [`QueryBuilder::build_search_query`].
pub const SEARCH_COLUMN: &str = "name";

/// Builds queries against a borrowed [`Whitelist`].
///
/// The builder holds no other state; every method is a pure function of its
/// arguments and the whitelist.
#[derive(Debug, Clone, Copy)]
pub struct QueryBuilder<'w> {
    whitelist: &'w Whitelist,
}

impl Default for QueryBuilder<'static> {
    fn default() -> Self {
        Self::new(Whitelist::standard())
    }
}

impl<'w> QueryBuilder<'w> {
    /// Creates a builder validating against `whitelist`.
    #[must_use]
    pub const fn new(whitelist: &'w Whitelist) -> Self {
        Self { whitelist }
    }

    /// Builds `SELECT * FROM <table> WHERE <column> <operator> ?`.
    ///
    /// Checks the table, then the column, then the operator. For `IN` and
    /// `NOT IN` the placeholder becomes a parenthesised list with one `?` per
    /// value.
    pub fn build_filter_query(
        &self,
        table: &str,
        column: &str,
        operator: &str,
        value: impl Into<FilterValue>,
    ) -> Result<Query> {
        self.build_compound_filter_query(table, [Condition::new(column, operator, value)])
    }

    /// Builds `SELECT * FROM <table> WHERE name LIKE ?`.
    ///
    /// The term is wrapped in `%` and bound as a single text parameter.
    /// Tables whose allow-list lacks `name` are rejected with
    /// [`QueryError::InvalidColumn`].
    pub fn build_search_query(&self, table: &str, search_term: &str) -> Result<Query> {
        let table = self.resolve_table(table)?;
        let column = resolve_column(table, SEARCH_COLUMN)?;
        let sql = format!(
            "SELECT * FROM {} WHERE {column} LIKE {}",
            table.name(),
            SqlValue::placeholder()
        );
        Ok(Query::new(
            sql,
            vec![SqlValue::Text(format!("%{search_term}%"))],
        ))
    }

    /// Builds a `SELECT *` whose conditions are joined with `AND`.
    ///
    /// With no conditions the query selects every row of the table.
    pub fn build_compound_filter_query(
        &self,
        table: &str,
        conditions: impl IntoIterator<Item = Condition>,
    ) -> Result<Query> {
        let table = self.resolve_table(table)?;

        let mut clauses = Vec::new();
        let mut params = Vec::new();
        for condition in conditions {
            let column = resolve_column(table, &condition.column)?;
            let operator = resolve_operator(&condition.operator)?;
            clauses.push(render_condition(column, operator, condition.value, &mut params)?);
        }

        let mut sql = format!("SELECT * FROM {}", table.name());
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        Ok(Query::new(sql, params))
    }

    fn resolve_table(&self, name: &str) -> Result<&'w Table> {
        self.whitelist
            .table(name)
            .ok_or_else(|| QueryError::InvalidTable {
                table: name.to_string(),
                allowed: self.whitelist.table_names(),
            })
    }
}

fn resolve_column<'t>(table: &'t Table, name: &str) -> Result<&'t str> {
    table.column(name).ok_or_else(|| QueryError::InvalidColumn {
        table: table.name().to_string(),
        column: name.to_string(),
        allowed: table.columns().to_vec(),
    })
}

fn resolve_operator(raw: &str) -> Result<Operator> {
    Operator::parse(raw).ok_or_else(|| QueryError::InvalidOperator {
        operator: raw.to_string(),
        allowed: Operator::allowed(),
    })
}

/// Renders one `<column> <operator> <placeholders>` clause, appending its
/// values to `params`.
fn render_condition(
    column: &str,
    operator: Operator,
    value: FilterValue,
    params: &mut Vec<SqlValue>,
) -> Result<String> {
    match (operator.takes_list(), value) {
        (false, FilterValue::Scalar(value)) => {
            params.push(value);
            Ok(format!("{column} {operator} {}", SqlValue::placeholder()))
        }
        (false, FilterValue::List(_)) => Err(QueryError::InvalidValue {
            operator,
            reason: "a list is only accepted by IN and NOT IN",
        }),
        (true, FilterValue::List(values)) if values.is_empty() => {
            Err(QueryError::InvalidValue {
                operator,
                reason: "at least one value is required",
            })
        }
        (true, value) => {
            let values = match value {
                FilterValue::Scalar(value) => vec![value],
                FilterValue::List(values) => values,
            };
            let placeholders = vec![SqlValue::placeholder(); values.len()].join(", ");
            params.extend(values);
            Ok(format!("{column} {operator} ({placeholders})"))
        }
    }
}

/// Builds a filter query against the default whitelist.
///
/// See [`QueryBuilder::build_filter_query`].
pub fn build_filter_query(
    table: &str,
    column: &str,
    operator: &str,
    value: impl Into<FilterValue>,
) -> Result<Query> {
    QueryBuilder::default().build_filter_query(table, column, operator, value)
}

/// Builds a name search query against the default whitelist.
///
/// See [`QueryBuilder::build_search_query`].
pub fn build_search_query(table: &str, search_term: &str) -> Result<Query> {
    QueryBuilder::default().build_search_query(table, search_term)
}

/// Builds an `AND`-joined filter query against the default whitelist.
///
/// See [`QueryBuilder::build_compound_filter_query`].
pub fn build_compound_filter_query(
    table: &str,
    conditions: impl IntoIterator<Item = Condition>,
) -> Result<Query> {
    QueryBuilder::default().build_compound_filter_query(table, conditions)
}
