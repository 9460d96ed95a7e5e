//! Exact-path router with method dispatch.

use std::future::Future;
use std::sync::Arc;

use super::middleware::{BoxFuture, Middleware, MiddlewareResult};
use super::request::{Method, Request};
use super::response::Response;

/// A boxed async handler function.
pub type Handler = Arc<dyn Fn(Request) -> BoxFuture<'static, Response> + Send + Sync>;

/// A single route definition.
#[derive(Clone)]
pub struct Route {
    /// HTTP method.
    pub method: Method,
    /// Literal path, without a trailing slash.
    pub path: String,
    /// Request handler.
    pub handler: Handler,
}

impl Route {
    /// Creates a new route.
    pub fn new<F, Fut>(method: Method, path: &str, handler: F) -> Self
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        Self {
            method,
            path: normalize(path).to_string(),
            handler: Arc::new(move |req| Box::pin(handler(req))),
        }
    }
}

/// Routes requests to handlers by method and path.
#[derive(Default)]
pub struct Router {
    routes: Vec<Route>,
    middleware: Vec<Arc<dyn Middleware>>,
}

impl Router {
    /// Creates a new empty router.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a GET route.
    #[must_use]
    pub fn get<F, Fut>(self, path: &str, handler: F) -> Self
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.route(Method::Get, path, handler)
    }

    /// Adds a route with any method.
    #[must_use]
    pub fn route<F, Fut>(mut self, method: Method, path: &str, handler: F) -> Self
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.routes.push(Route::new(method, path, handler));
        self
    }

    /// Adds global middleware.
    #[must_use]
    pub fn middleware(mut self, mw: impl Middleware + 'static) -> Self {
        self.middleware.push(Arc::new(mw));
        self
    }

    /// Handles an incoming request.
    ///
    /// Unknown paths get 404; known paths with another method get 405.
    pub fn handle(&self, mut request: Request) -> BoxFuture<'_, Response> {
        Box::pin(async move {
            for mw in &self.middleware {
                match mw.before(&request).await {
                    MiddlewareResult::Continue(req) => request = req,
                    MiddlewareResult::Response(res) => return self.run_after(res).await,
                }
            }

            let response = match self.find_route(&request) {
                Lookup::Found(route) => (route.handler)(request).await,
                Lookup::MethodNotAllowed => Response::method_not_allowed(),
                Lookup::NotFound => Response::not_found(),
            };

            self.run_after(response).await
        })
    }

    async fn run_after(&self, mut response: Response) -> Response {
        for mw in self.middleware.iter().rev() {
            response = mw.after(response).await;
        }
        response
    }

    fn find_route(&self, request: &Request) -> Lookup<'_> {
        let path = normalize(&request.path);
        let mut path_matched = false;

        for route in &self.routes {
            if route.path == path {
                path_matched = true;
                if route.method == request.method {
                    return Lookup::Found(route);
                }
            }
        }

        if path_matched {
            Lookup::MethodNotAllowed
        } else {
            Lookup::NotFound
        }
    }
}

enum Lookup<'r> {
    Found(&'r Route),
    MethodNotAllowed,
    NotFound,
}

fn normalize(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}
