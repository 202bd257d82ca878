//! Error types for the HTTP message layer.

use thiserror::Error;

/// Errors that can occur while parsing a request head.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The method token on the request line is not one we recognize.
    #[error("unsupported HTTP method: {0}")]
    InvalidMethod(String),

    /// The version token on the request line is not one we recognize.
    #[error("unsupported HTTP version: {0}")]
    InvalidVersion(String),

    /// The request line does not have the method/target/version shape.
    #[error("malformed request line: {0}")]
    MalformedRequestLine(String),

    /// A header line has no colon separator.
    #[error("malformed header line: {0}")]
    InvalidHeader(String),

    /// A header required by the protocol version is absent.
    #[error("missing required header: {0}")]
    MissingHeader(String),

    /// The buffer holds no request at all.
    #[error("empty request")]
    EmptyRequest,

    /// The request head is not valid UTF-8.
    #[error("request is not valid UTF-8")]
    InvalidEncoding,
}
