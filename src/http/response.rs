//! HTTP response construction.

use std::collections::HashMap;

use serde::Serialize;

/// The status codes the server actually emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok = 200,
    BadRequest = 400,
    MethodNotAllowed = 405,
    InternalServerError = 500,
    ServiceUnavailable = 503,
}

impl StatusCode {
    /// The standard reason phrase for this status code.
    pub fn reason(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::InternalServerError => "Internal Server Error",
            StatusCode::ServiceUnavailable => "Service Unavailable",
        }
    }
}

/// An HTTP response under construction.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// The HTTP headers
    pub headers: HashMap<String, String>,
    /// The response body
    pub body: Vec<u8>,
}

impl Response {
    /// Create a new response with the given status code.
    pub fn new(status: StatusCode) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Server".to_string(), "distroless-hello".to_string());

        Self {
            status,
            headers,
            body: Vec::new(),
        }
    }

    /// Add or replace a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set a plain-text body.
    pub fn text(self, body: impl Into<String>) -> Self {
        let body = body.into().into_bytes();
        self.header("Content-Type", "text/plain").body_bytes(body)
    }

    /// Set a JSON body, pretty-printed with 2-space indentation.
    pub fn json<T: Serialize>(self, value: &T) -> Result<Self, serde_json::Error> {
        let body = serde_json::to_vec_pretty(value)?;
        Ok(self
            .header("Content-Type", "application/json")
            .body_bytes(body))
    }

    fn body_bytes(mut self, body: Vec<u8>) -> Self {
        let content_length = body.len().to_string();
        self.body = body;
        self.header("Content-Length", content_length)
    }

    /// Render the response to wire format.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.body.len() + 128);

        let status_line = format!(
            "HTTP/1.1 {code} {reason}\r\n",
            code = self.status as u16,
            reason = self.status.reason()
        );
        bytes.extend_from_slice(status_line.as_bytes());

        for (name, value) in &self.headers {
            let header_line = format!("{name}: {value}\r\n");
            bytes.extend_from_slice(header_line.as_bytes());
        }

        bytes.extend_from_slice(b"\r\n");
        bytes.extend_from_slice(&self.body);

        bytes
    }
}
