//! HTTP response type.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::json;

/// An HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HashMap<String, String>,
    /// Response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Creates a new response with the given status and an empty body.
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    /// Creates a 200 response with JSON content.
    pub fn json<T: Serialize>(data: &T) -> Self {
        Self::json_with_status(200, data)
    }

    /// Creates a response with JSON content and the given status.
    pub fn json_with_status<T: Serialize>(status: u16, data: &T) -> Self {
        match serde_json::to_vec(data) {
            Ok(body) => Self::new(status)
                .header("Content-Type", "application/json")
                .body(body),
            Err(err) => {
                tracing::error!(error = %err, "Failed to serialize response body");
                Self::internal_server_error()
            }
        }
    }

    /// Creates a JSON error response of the form `{"error": message}`.
    pub fn error(status: u16, message: impl Into<String>) -> Self {
        let body = json!({ "error": message.into() });
        Self::new(status)
            .header("Content-Type", "application/json")
            .body(body.to_string())
    }

    /// Creates a 404 Not Found response.
    pub fn not_found() -> Self {
        Self::error(404, "not found")
    }

    /// Creates a 405 Method Not Allowed response.
    pub fn method_not_allowed() -> Self {
        Self::error(405, "method not allowed")
    }

    /// Creates a 500 Internal Server Error response.
    ///
    /// The body is always the same generic message.
    pub fn internal_server_error() -> Self {
        Self::error(500, "internal server error")
    }

    /// Sets a header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Sets the body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Parses the body as JSON.
    pub fn json_body(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}
