//! Middleware run around every routed request.

use std::future::Future;
use std::pin::Pin;

use tracing::{info, warn};

use super::request::Request;
use super::response::Response;

/// A boxed future for async middleware and handlers.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Result of middleware processing.
pub enum MiddlewareResult {
    /// Continue to the next middleware or the handler.
    Continue(Request),
    /// Stop processing and return this response.
    Response(Response),
}

/// Processes requests before and responses after the handler.
pub trait Middleware: Send + Sync {
    /// Called before the request handler.
    fn before<'a>(&'a self, req: &'a Request) -> BoxFuture<'a, MiddlewareResult>;

    /// Called after the request handler.
    fn after<'a>(&'a self, res: Response) -> BoxFuture<'a, Response>;
}

/// Logs each request line and the resulting status.
///
/// Query string values are not logged; they are untrusted input.
pub struct LoggingMiddleware;

impl Middleware for LoggingMiddleware {
    fn before<'a>(&'a self, req: &'a Request) -> BoxFuture<'a, MiddlewareResult> {
        Box::pin(async move {
            info!(method = %req.method, path = %req.path, "Request");
            MiddlewareResult::Continue(req.clone())
        })
    }

    fn after<'a>(&'a self, res: Response) -> BoxFuture<'a, Response> {
        Box::pin(async move {
            if res.status >= 400 {
                warn!(status = res.status, "Response");
            } else {
                info!(status = res.status, "Response");
            }
            res
        })
    }
}
