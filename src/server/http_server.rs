//! The accept loop.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::signal;
use tokio::sync::{mpsc, Semaphore};
use tokio::task::JoinSet;

use crate::http::{Request, Response, StatusCode};
use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::handler::Handler;

/// A TCP listener dispatching every request to a single handler.
pub struct HttpServer {
    /// The server configuration.
    pub config: ServerConfig,
    handler: Handler,
}

impl HttpServer {
    /// Create a server from a configuration and the handler it will serve.
    pub fn new(config: ServerConfig, handler: Handler) -> Self {
        Self { config, handler }
    }

    /// Bind the socket and serve until the process is told to stop.
    ///
    /// A bind failure is returned to the caller; everything after that is
    /// logged and survived.
    pub async fn start(&self) -> Result<(), Error> {
        let listener = TcpListener::bind(&self.config.addr).await?;
        info!("Server running on port {port}", port = self.config.addr.port());

        let semaphore = Arc::new(Semaphore::new(self.config.max_connections));
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);
        let mut tasks = JoinSet::new();

        Self::spawn_ctrl_c_task(shutdown_tx.clone(), &mut tasks);

        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => {
                    info!("Shutting down server...");
                    break;
                }

                accepted = listener.accept() => {
                    match accepted {
                        Ok((socket, addr)) => {
                            self.accept_connection(socket, addr, semaphore.clone(), &mut tasks)
                                .await;
                        }
                        Err(e) => {
                            if Self::accept_error(e).await {
                                break;
                            }
                        }
                    }
                }
            }
        }

        Self::drain(&mut tasks).await;
        Ok(())
    }

    /// Hand an accepted socket to a connection task, or refuse it with a 503
    /// when the connection cap is reached.
    async fn accept_connection(
        &self,
        mut socket: TcpStream,
        addr: SocketAddr,
        semaphore: Arc<Semaphore>,
        tasks: &mut JoinSet<()>,
    ) {
        let permit = match semaphore.try_acquire_owned() {
            Ok(permit) => permit,
            Err(_) => {
                warn!("Connection limit reached, rejecting connection from {addr}");
                let response = Response::new(StatusCode::ServiceUnavailable)
                    .text("server is at capacity, please try again later");
                let _ = socket.write_all(&response.to_bytes()).await;
                return;
            }
        };

        let handler = self.handler.clone();
        let read_buffer_size = self.config.read_buffer_size;

        tasks.spawn(async move {
            // Permit is released when the task finishes
            let _permit = permit;

            if let Err(e) = Self::handle_connection(&mut socket, handler, read_buffer_size).await {
                error!("Error handling connection from {addr}: {e}");
            }
        });
    }

    /// Serve a single connection: read, parse, dispatch, respond, log.
    pub async fn handle_connection(
        socket: &mut (impl AsyncRead + AsyncWrite + Unpin),
        handler: Handler,
        read_buffer_size: usize,
    ) -> Result<(), Error> {
        let mut buf = vec![0; read_buffer_size];

        let n = socket.read(&mut buf).await?;
        if n == 0 {
            return Ok(()); // Connection closed
        }

        let request = match Request::parse(&buf[..n]) {
            Ok(request) => request,
            Err(e) => {
                let response =
                    Response::new(StatusCode::BadRequest).text(format!("bad request: {e}"));
                socket.write_all(&response.to_bytes()).await?;
                return Err(Error::Parse(e));
            }
        };

        let method = request.method;
        let target = request.target.clone();

        let response = match handler(request).await {
            Ok(response) => response,
            Err(e) => {
                error!("Handler error for {method} {target}: {e}");
                Response::new(StatusCode::InternalServerError).text("internal server error")
            }
        };

        socket.write_all(&response.to_bytes()).await?;
        info!("[HTTP] {method} {target} {status}", status = response.status as u16);

        Ok(())
    }

    /// Turn Ctrl+C into a shutdown signal.
    fn spawn_ctrl_c_task(shutdown_tx: mpsc::Sender<()>, tasks: &mut JoinSet<()>) {
        tasks.spawn(async move {
            match signal::ctrl_c().await {
                Ok(()) => {
                    info!("Received Ctrl+C, initiating shutdown");
                    let _ = shutdown_tx.send(()).await;
                }
                Err(e) => {
                    error!("Error setting up Ctrl+C handler: {e}");
                }
            }
        });
    }

    /// Decide whether an accept error is fatal. Non-fatal errors back off
    /// briefly before the next accept.
    async fn accept_error(e: std::io::Error) -> bool {
        error!("Error accepting connection: {e}");

        if e.kind() == std::io::ErrorKind::BrokenPipe {
            error!("Listener is gone, shutting down");
            return true;
        }

        tokio::time::sleep(Duration::from_millis(100)).await;
        false
    }

    /// Wait for in-flight connection tasks, bounded by a timeout.
    async fn drain(tasks: &mut JoinSet<()>) {
        info!("Waiting for {len} active tasks to complete...", len = tasks.len());
        let shutdown_timeout = Duration::from_secs(30);
        let _ = tokio::time::timeout(shutdown_timeout, async {
            while let Some(res) = tasks.join_next().await {
                if let Err(e) = res {
                    error!("Task failed during shutdown: {e}");
                }
            }
        })
        .await;

        info!("Server shutdown complete");
    }
}
