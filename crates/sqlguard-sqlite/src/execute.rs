//! Running validated queries.

use sqlguard_core::{Query, SqlValue};
use sqlx::sqlite::{SqliteArguments, SqliteColumn, SqliteRow};
use sqlx::{Column, Executor, Row as _, Sqlite, TypeInfo, ValueRef};
use tracing::debug;

use crate::error::Result;
use crate::row::Row;

/// Executes a query with its bound parameters and collects every row.
///
/// `executor` is anything sqlx can run a statement on: a `&SqlitePool`, a
/// `&mut SqliteConnection`, or a transaction. The template is sent to the
/// engine as-is; each parameter is bound to its placeholder in order.
///
/// # Example
///
/// ```ignore
/// let query = sqlguard_core::build_search_query("products", "Lap")?;
/// let mut conn = pool.acquire().await?;
/// let rows = sqlguard_sqlite::execute(&mut *conn, &query).await?;
/// ```
pub async fn execute<'c, E>(executor: E, query: &Query) -> Result<Vec<Row>>
where
    E: Executor<'c, Database = Sqlite>,
{
    debug!(sql = %query.sql(), params = query.params().len(), "Executing query");

    let mut statement = sqlx::query(query.sql());
    for param in query.params() {
        statement = bind_param(statement, param.clone());
    }

    let rows = statement.fetch_all(executor).await?;
    let rows = rows.iter().map(decode_row).collect::<sqlx::Result<Vec<_>>>()?;

    debug!(rows = rows.len(), "Query returned");
    Ok(rows)
}

/// Binds a `SqlValue` parameter to a query.
fn bind_param<'q>(
    query: sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>,
    value: SqlValue,
) -> sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>> {
    match value {
        SqlValue::Null => query.bind(Option::<i64>::None),
        SqlValue::Bool(b) => query.bind(b),
        SqlValue::Int(i) => query.bind(i),
        SqlValue::Float(f) => query.bind(f),
        SqlValue::Text(s) => query.bind(s),
        SqlValue::Blob(b) => query.bind(b),
    }
}

fn decode_row(row: &SqliteRow) -> sqlx::Result<Row> {
    let fields = row
        .columns()
        .iter()
        .map(|column| Ok((column.name().to_string(), decode_value(row, column)?)))
        .collect::<sqlx::Result<Vec<_>>>()?;
    Ok(Row::new(fields))
}

/// Decodes one cell using its runtime storage class.
///
/// SQLite stores booleans as integers, so an integer in a column declared
/// `BOOLEAN` decodes as [`SqlValue::Bool`].
fn decode_value(row: &SqliteRow, column: &SqliteColumn) -> sqlx::Result<SqlValue> {
    let index = column.ordinal();
    let storage = {
        let raw = row.try_get_raw(index)?;
        if raw.is_null() {
            return Ok(SqlValue::Null);
        }
        raw.type_info().name().to_ascii_uppercase()
    };

    let value = match storage.as_str() {
        "INTEGER" | "BOOLEAN" => {
            let n: i64 = row.try_get(index)?;
            if column.type_info().name().eq_ignore_ascii_case("BOOLEAN") {
                SqlValue::Bool(n != 0)
            } else {
                SqlValue::Int(n)
            }
        }
        "REAL" => SqlValue::Float(row.try_get(index)?),
        "BLOB" => SqlValue::Blob(row.try_get(index)?),
        _ => SqlValue::Text(row.try_get(index)?),
    };
    Ok(value)
}
