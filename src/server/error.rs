//! Error types for the HTTP server.

use thiserror::Error;

use crate::http::ParseError;

/// Errors that can occur while serving.
#[derive(Debug, Error)]
pub enum Error {
    /// Error parsing an HTTP request.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// I/O error on the listener or a connection.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error while building a response.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
