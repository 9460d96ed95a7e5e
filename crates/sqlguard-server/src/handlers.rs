//! Route handlers.
//!
//! Every handler validates its input through the whitelist before it
//! touches the pool, so a rejected request never holds a connection.

use serde_json::json;
use sqlguard_core::{Condition, FilterValue, Operator};

use crate::error::{ApiError, Result};
use crate::http::{Request, Response};
use crate::state::AppState;

/// `GET /health`
pub async fn health(_state: AppState, _req: Request) -> Response {
    Response::json(&json!({ "status": "ok" }))
}

/// `GET /api/products?category=&min_price=&max_price=`
pub async fn products(state: AppState, req: Request) -> Response {
    respond(async {
        let mut conditions = Vec::new();
        if let Some(category) = req.get_query_nonempty("category") {
            conditions.push(Condition::new("category", "=", category));
        }
        if let Some(min) = price_param(&req, "min_price")? {
            conditions.push(Condition::new("price", ">=", min));
        }
        if let Some(max) = price_param(&req, "max_price")? {
            conditions.push(Condition::new("price", "<=", max));
        }

        let query = state
            .builder()
            .build_compound_filter_query("products", conditions)?;
        let rows = state.fetch(&query).await?;
        Ok(Response::json(&json!({ "products": rows })))
    })
    .await
}

/// `GET /api/products/by-category?category=`
pub async fn products_by_category(state: AppState, req: Request) -> Response {
    respond(async {
        let builder = state.builder();
        let query = match req.get_query_nonempty("category") {
            Some(category) => builder.build_filter_query("products", "category", "=", category)?,
            None => builder.build_compound_filter_query("products", Vec::new())?,
        };
        let rows = state.fetch(&query).await?;
        Ok(Response::json(&json!({ "products": rows })))
    })
    .await
}

/// `GET /api/users/search?q=`
pub async fn users_search(state: AppState, req: Request) -> Response {
    respond(async {
        let term = req.get_query("q").unwrap_or_default();
        let query = state.builder().build_search_query("users", term)?;
        let rows = state.fetch(&query).await?;
        Ok(Response::json(&json!({ "users": rows })))
    })
    .await
}

/// `GET /api/records?table=&column=&op=&value=`
pub async fn records(state: AppState, req: Request) -> Response {
    respond(async {
        let table = req
            .get_query_nonempty("table")
            .ok_or_else(|| ApiError::missing("table"))?;
        let column = req
            .get_query_nonempty("column")
            .ok_or_else(|| ApiError::missing("column"))?;
        let op = req.get_query_nonempty("op").unwrap_or("=");
        let raw = req.get_query("value").unwrap_or_default();

        let query = state
            .builder()
            .build_filter_query(table, column, op, record_value(op, raw))?;
        let rows = state.fetch(&query).await?;
        Ok(Response::json(&json!({ "rows": rows })))
    })
    .await
}

/// `GET /api/search?table=&q=`
pub async fn search(state: AppState, req: Request) -> Response {
    respond(async {
        let table = req
            .get_query_nonempty("table")
            .ok_or_else(|| ApiError::missing("table"))?;
        let term = req.get_query("q").unwrap_or_default();
        let query = state.builder().build_search_query(table, term)?;
        let rows = state.fetch(&query).await?;
        Ok(Response::json(&json!({ "rows": rows })))
    })
    .await
}

async fn respond(work: impl std::future::Future<Output = Result<Response>>) -> Response {
    work.await.unwrap_or_else(ApiError::into_response)
}

fn price_param(req: &Request, name: &'static str) -> Result<Option<f64>> {
    req.get_query_nonempty(name)
        .map(|raw| match raw.trim().parse::<f64>() {
            Ok(price) if price.is_finite() => Ok(price),
            _ => Err(ApiError::BadParameter {
                name,
                reason: format!("'{raw}' is not a number"),
            }),
        })
        .transpose()
}

/// Turns the raw `value` parameter into a filter value.
///
/// Values stay text. SQLite applies the column's affinity when comparing,
/// so `'700'` still matches numerically against a REAL column while a TEXT
/// column keeps `'0100'` as written. List operators split on commas.
fn record_value(op: &str, raw: &str) -> FilterValue {
    if Operator::parse(op).is_some_and(Operator::takes_list) {
        FilterValue::list(raw.split(',').map(str::trim))
    } else {
        FilterValue::scalar(raw)
    }
}
