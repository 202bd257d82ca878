//! Minimal HTTP/1.x message layer.
//!
//! Just enough of HTTP to parse a request head out of a raw buffer and
//! render a response back. There is no body handling and no streaming; the
//! greeting server never needs either.

mod error;
mod method;
mod request;
mod response;
mod version;

// Re-export public items
pub use error::ParseError;
pub use method::Method;
pub use request::Request;
pub use response::{Response, StatusCode};
pub use version::Version;
