//! The request handler seam.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::http::{Request, Response};
use crate::server::error::Error;

/// Boxed future returned by a handler invocation.
pub type HandlerFuture = Pin<Box<dyn Future<Output = Result<Response, Error>> + Send>>;

/// The single unit of request logic. Every parsed request is passed to it,
/// whatever the path.
pub type Handler = Arc<dyn Fn(Request) -> HandlerFuture + Send + Sync>;

/// Wrap an async function as a [`Handler`].
pub fn handler<F, Fut>(f: F) -> Handler
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Response, Error>> + Send + 'static,
{
    Arc::new(move |request| Box::pin(f(request)))
}
