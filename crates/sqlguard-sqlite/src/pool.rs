//! Connection pool setup.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

use crate::error::{ExecutionError, Result};

/// Where and how to open the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// SQLite URL, e.g. `sqlite:app.db` or `sqlite::memory:`.
    pub url: String,
    /// Upper bound on pooled connections.
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::from("sqlite::memory:"),
            max_connections: 5,
        }
    }
}

impl DatabaseConfig {
    /// Creates a config for `url` with the default pool size.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Returns `true` if the URL names a private in-memory database.
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

/// Opens a connection pool, creating the database file if it is missing.
///
/// Every connection to an in-memory database sees its own empty database,
/// so in-memory pools are held at exactly one long-lived connection.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool> {
    let connect_error = |source| ExecutionError::Connect {
        url: config.url.clone(),
        source,
    };

    let options = SqliteConnectOptions::from_str(&config.url)
        .map_err(connect_error)?
        .create_if_missing(true);

    let pool_options = if config.is_in_memory() {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(config.max_connections.max(1))
    };

    let pool = pool_options
        .connect_with(options)
        .await
        .map_err(connect_error)?;

    info!(url = %config.url, "Database pool ready");
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_detection() {
        assert!(DatabaseConfig::new("sqlite::memory:").is_in_memory());
        assert!(DatabaseConfig::new("sqlite:file:demo?mode=memory&cache=shared").is_in_memory());
        assert!(!DatabaseConfig::new("sqlite:sqlguard.db").is_in_memory());
    }

    #[tokio::test]
    async fn test_in_memory_pool_shares_one_database() {
        let pool = connect(&DatabaseConfig::default()).await.unwrap();
        sqlx::query("CREATE TABLE t (id INTEGER)")
            .execute(&pool)
            .await
            .unwrap();

        // A second acquire must see the table created through the first.
        let mut conn = pool.acquire().await.unwrap();
        sqlx::query("SELECT id FROM t")
            .fetch_all(&mut *conn)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_connect_rejects_bad_url() {
        let err = connect(&DatabaseConfig::new("postgres://localhost/db"))
            .await
            .unwrap_err();
        assert!(matches!(err, ExecutionError::Connect { .. }));
    }
}
