//! Minimal HTTP layer: request and response values, a router, and the
//! hyper adaptor that serves it.

mod middleware;
mod request;
mod response;
mod router;
mod serve;

pub use middleware::{BoxFuture, LoggingMiddleware, Middleware, MiddlewareResult};
pub use request::{Method, Request};
pub use response::Response;
pub use router::{Handler, Route, Router};
pub use serve::serve;
