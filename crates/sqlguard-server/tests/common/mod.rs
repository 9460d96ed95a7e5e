#![allow(dead_code)]

use serde_json::Value;
use sqlguard_core::Whitelist;
use sqlguard_server::http::{Request, Router};
use sqlguard_server::{app, seed, AppState};
use sqlguard_sqlite::{connect, DatabaseConfig};
use sqlx::SqlitePool;

pub struct TestApp {
    pub pool: SqlitePool,
    pub router: Router,
}

/// A seeded in-memory database behind the full router.
pub async fn create_test_app() -> TestApp {
    create_test_app_with(Whitelist::default()).await
}

pub async fn create_test_app_with(whitelist: Whitelist) -> TestApp {
    let pool = connect(&DatabaseConfig::default())
        .await
        .expect("Failed to create in-memory SQLite pool");
    seed(&pool).await.expect("Failed to seed demo data");
    let router = app(&AppState::new(pool.clone(), whitelist));
    TestApp { pool, router }
}

impl TestApp {
    /// Sends a GET with the given query parameters and returns status and body.
    pub async fn get(&self, path: &str, params: &[(&str, &str)]) -> (u16, Value) {
        let req = params
            .iter()
            .fold(Request::get(path), |req, (k, v)| req.query_param(*k, *v));
        let res = self.router.handle(req).await;
        let body = res.json_body().expect("Response body is not JSON");
        (res.status, body)
    }

    pub async fn count(&self, table: &str) -> usize {
        let query = sqlguard_core::build_compound_filter_query(table, Vec::new()).unwrap();
        sqlguard_sqlite::execute(&self.pool, &query).await.unwrap().len()
    }
}

/// Collects one field from every object in a JSON array.
pub fn field(rows: &Value, name: &str) -> Vec<Value> {
    rows.as_array()
        .expect("Expected a JSON array")
        .iter()
        .map(|row| row[name].clone())
        .collect()
}
