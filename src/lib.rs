//! A small demonstration HTTP server.
//!
//! The server binds a TCP listener on the port named by the `PORT`
//! environment variable (8080 when unset or unusable) and answers every GET
//! request, whatever the path, with a pretty-printed JSON greeting that
//! echoes the request target and the toolchain's version string. One access
//! line per request is written to stdout with an `[HTTP]` prefix.
//!
//! The crate is split into three modules:
//!
//! - [`http`] — just enough HTTP/1.x to parse a request head from a raw
//!   buffer and render a response back
//! - [`server`] — the tokio accept loop and the handler seam
//! - [`greeting`] — the payload itself and the catch-all handler
//!
//! # Examples
//!
//! Parsing a request head:
//!
//! ```
//! use distroless_hello::http::{Method, Request};
//!
//! let raw = b"GET /hello?x=1 HTTP/1.1\r\nHost: example.com\r\n\r\n";
//! let request = Request::parse(raw).unwrap();
//!
//! assert_eq!(request.method, Method::Get);
//! assert_eq!(request.target, "/hello?x=1");
//! ```
//!
//! Rendering a JSON response:
//!
//! ```
//! use distroless_hello::http::{Response, StatusCode};
//!
//! let response = Response::new(StatusCode::Ok)
//!     .json(&serde_json::json!({"ok": true}))
//!     .unwrap();
//!
//! let wire = String::from_utf8(response.to_bytes()).unwrap();
//! assert!(wire.starts_with("HTTP/1.1 200 OK\r\n"));
//! ```

pub mod greeting;
pub mod http;
pub mod server;

// Re-export commonly used items for convenience
pub use greeting::Greeting;
pub use http::{Method, ParseError, Request, Response, StatusCode, Version};
pub use server::{Error as ServerError, HttpServer, ServerConfig};
