//! Binary entry point for the greeting server.

use distroless_hello::greeting;
use distroless_hello::server::{handler, HttpServer, ServerConfig};
use env_logger::{Builder, Env, Target};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Startup and access lines belong on stdout, not env_logger's default
    // stderr.
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stdout)
        .init();

    let config = ServerConfig::from_env();
    let server = HttpServer::new(config, handler(greeting::handle));

    // A bind failure propagates out and exits the process non-zero.
    server.start().await?;

    Ok(())
}
