//! HTTP request parsing and representation.

use std::collections::HashMap;
use std::str::FromStr;

use crate::http::error::ParseError;
use crate::http::method::Method;
use crate::http::version::Version;

/// A parsed HTTP request head.
///
/// The target is kept exactly as it appeared on the request line, query
/// string and all; the greeting payload echoes it byte-for-byte.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method.
    pub method: Method,
    /// The request target, verbatim.
    pub target: String,
    /// The protocol version.
    pub version: Version,
    /// The request headers.
    pub headers: HashMap<String, String>,
}

impl Request {
    /// Parse a request head from a raw buffer.
    ///
    /// Reads the request line and headers up to the first blank line; any
    /// body bytes after it are ignored. HTTP/1.1 requests must carry a
    /// `Host` header.
    pub fn parse(input: &[u8]) -> Result<Request, ParseError> {
        let text = std::str::from_utf8(input).map_err(|_| ParseError::InvalidEncoding)?;
        let mut lines = text.lines();

        let request_line = lines.next().ok_or(ParseError::EmptyRequest)?;
        let mut tokens = request_line.split_whitespace();
        let (method, target, version) = match (tokens.next(), tokens.next(), tokens.next(), tokens.next()) {
            (Some(method), Some(target), Some(version), None) => (method, target, version),
            _ => return Err(ParseError::MalformedRequestLine(request_line.to_string())),
        };

        let method = Method::from_str(method)?;
        let version = Version::from_str(version)?;

        let mut headers = HashMap::new();
        for line in lines {
            // Blank line ends the head
            if line.is_empty() {
                break;
            }
            let (name, value) = line
                .split_once(':')
                .ok_or_else(|| ParseError::InvalidHeader(line.to_string()))?;
            headers.insert(name.trim().to_string(), value.trim().to_string());
        }

        if version == Version::Http11 && !headers.keys().any(|k| k.eq_ignore_ascii_case("host")) {
            return Err(ParseError::MissingHeader("Host".to_string()));
        }

        Ok(Request {
            method,
            target: target.to_string(),
            version,
            headers,
        })
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Whether a header is present, whatever its case.
    pub fn has_header(&self, name: &str) -> bool {
        self.header(name).is_some()
    }
}
