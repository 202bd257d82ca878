//! Server configuration.

use std::net::SocketAddr;

use log::warn;

/// Environment variable naming the listen port.
pub const PORT_ENV: &str = "PORT";

/// Port used when `PORT` is unset or unusable.
pub const DEFAULT_PORT: u16 = 8080;

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The address to bind to.
    pub addr: SocketAddr,
    /// The maximum number of concurrent connections.
    pub max_connections: usize,
    /// The read buffer size.
    pub read_buffer_size: usize,
}

impl ServerConfig {
    /// Build a configuration from the process environment.
    ///
    /// Listens on all interfaces on the port named by `PORT`. An unset or
    /// unparsable value falls back to 8080; a bad value is never fatal.
    pub fn from_env() -> Self {
        let port = resolve_port(std::env::var(PORT_ENV).ok().as_deref());
        Self::with_port(port)
    }

    /// A configuration listening on all interfaces on the given port.
    pub fn with_port(port: u16) -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], port)),
            ..Self::default()
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            max_connections: 1024,
            read_buffer_size: 8192,
        }
    }
}

/// Resolve the listen port from the raw value of the `PORT` variable.
pub(crate) fn resolve_port(raw: Option<&str>) -> u16 {
    match raw {
        None => DEFAULT_PORT,
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {PORT_ENV} value {value:?}, using {DEFAULT_PORT}");
            DEFAULT_PORT
        }),
    }
}
