//! HTTP server implementation.
//!
//! A single-listener tokio server. Every accepted connection is read once,
//! parsed, and dispatched to the one registered handler; there is no route
//! table.

mod config;
mod error;
mod handler;
mod http_server;

// Re-export public items
pub use config::{ServerConfig, DEFAULT_PORT, PORT_ENV};
pub use error::Error;
pub use handler::{handler, Handler, HandlerFuture};
pub use http_server::HttpServer;
