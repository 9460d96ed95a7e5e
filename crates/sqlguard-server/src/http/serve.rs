//! Serves a [`Router`] over HTTP/1 with hyper.

use std::convert::Infallible;
use std::future::Future;
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request as HyperRequest, Response as HyperResponse, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

use super::request::{Method, Request};
use super::response::Response;
use super::router::Router;

/// Accepts connections on `listener` until `shutdown` resolves.
///
/// Each connection is served on its own task. In-flight connections are
/// not awaited on shutdown.
pub async fn serve(
    listener: TcpListener,
    router: Router,
    shutdown: impl Future<Output = ()>,
) -> std::io::Result<()> {
    let router = Arc::new(router);
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "Listening");
    }

    tokio::pin!(shutdown);

    loop {
        let (stream, peer) = tokio::select! {
            accepted = listener.accept() => accepted?,
            () = &mut shutdown => {
                info!("Shutting down");
                return Ok(());
            }
        };
        debug!(%peer, "Accepted connection");

        let io = TokioIo::new(stream);
        let router = Arc::clone(&router);

        tokio::task::spawn(async move {
            let service = service_fn(move |req| {
                let router = Arc::clone(&router);
                handle_request(req, router)
            });

            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                debug!(error = %err, "Error serving connection");
            }
        });
    }
}

async fn handle_request(
    req: HyperRequest<hyper::body::Incoming>,
    router: Arc<Router>,
) -> Result<HyperResponse<Full<Bytes>>, Infallible> {
    let response = match Method::parse(req.method().as_str()) {
        Some(method) => {
            let uri = req.uri();
            let mut request = Request::new(method, uri.path());
            if let Some(query) = uri.query() {
                request.query = Request::parse_query_string(query);
            }
            router.handle(request).await
        }
        None => Response::method_not_allowed(),
    };

    Ok(into_hyper(response))
}

fn into_hyper(response: Response) -> HyperResponse<Full<Bytes>> {
    let mut builder = HyperResponse::builder()
        .status(StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR));

    for (key, value) in &response.headers {
        builder = builder.header(key.as_str(), value.as_str());
    }

    builder
        .body(Full::new(Bytes::from(response.body)))
        .unwrap_or_else(|err| {
            error!(error = %err, "Failed to build response");
            let mut fallback = HyperResponse::new(Full::new(Bytes::from_static(
                br#"{"error":"internal server error"}"#,
            )));
            *fallback.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            fallback
        })
}
