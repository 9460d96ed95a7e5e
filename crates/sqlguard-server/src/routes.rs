//! Route table.

use std::future::Future;

use crate::handlers;
use crate::http::{LoggingMiddleware, Request, Response, Router};
use crate::state::AppState;

/// Builds the application router over `state`.
pub fn app(state: &AppState) -> Router {
    Router::new()
        .get("/health", with_state(state, handlers::health))
        .get("/api/products", with_state(state, handlers::products))
        .get(
            "/api/products/by-category",
            with_state(state, handlers::products_by_category),
        )
        .get("/api/users/search", with_state(state, handlers::users_search))
        .get("/api/records", with_state(state, handlers::records))
        .get("/api/search", with_state(state, handlers::search))
        .middleware(LoggingMiddleware)
}

/// Adapts a `(state, request)` handler to the router's `(request)` shape.
fn with_state<H, Fut>(state: &AppState, handler: H) -> impl Fn(Request) -> Fut + Send + Sync + 'static
where
    H: Fn(AppState, Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Response> + Send + 'static,
{
    let state = state.clone();
    move |req| handler(state.clone(), req)
}
