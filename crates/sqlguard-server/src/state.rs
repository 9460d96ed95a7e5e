//! Shared application state.

use std::sync::Arc;

use sqlguard_core::{Query, QueryBuilder, Whitelist};
use sqlguard_sqlite::{execute, Row};
use sqlx::SqlitePool;

use crate::error::Result;

/// State shared by every handler.
///
/// The whitelist is fixed when the state is created and only read after.
#[derive(Debug, Clone)]
pub struct AppState {
    pool: SqlitePool,
    whitelist: Arc<Whitelist>,
}

impl AppState {
    /// Creates state over `pool` validating against `whitelist`.
    pub fn new(pool: SqlitePool, whitelist: Whitelist) -> Self {
        Self {
            pool,
            whitelist: Arc::new(whitelist),
        }
    }

    /// Returns a query builder over this state's whitelist.
    pub fn builder(&self) -> QueryBuilder<'_> {
        QueryBuilder::new(&self.whitelist)
    }

    /// Runs an already validated query on one pooled connection.
    ///
    /// The connection goes back to the pool when this returns, on success
    /// or failure.
    pub async fn fetch(&self, query: &Query) -> Result<Vec<Row>> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(sqlguard_sqlite::ExecutionError::from)?;
        Ok(execute(&mut *conn, query).await?)
    }
}
