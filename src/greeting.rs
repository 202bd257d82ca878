//! The demo greeting payload and its handler.

use serde::Serialize;
use tokio::process::Command;

use crate::http::{Method, Request, Response, StatusCode};
use crate::server::Error;

/// What the server says.
pub const GREETING_MESSAGE: &str = "Hello from distroless Rust with Cargo!";

/// Substituted when the toolchain version cannot be determined.
const UNKNOWN_VERSION: &str = "unknown";

/// The response payload, built fresh for every request.
///
/// Field order is the wire order. The `python_version` key is kept from the
/// service this one mirrors so existing consumers keep parsing the body
/// unchanged.
#[derive(Debug, Clone, Serialize)]
pub struct Greeting {
    pub message: String,
    pub python_version: String,
    pub path: String,
}

impl Greeting {
    /// Build the payload for a request target.
    pub async fn for_target(target: impl Into<String>) -> Self {
        Self {
            message: GREETING_MESSAGE.to_string(),
            python_version: toolchain_version().await,
            path: target.into(),
        }
    }
}

/// Report the toolchain version by asking `rustc` itself.
///
/// Any failure to run or read the probe degrades to `"unknown"`; a missing
/// toolchain must never fail the request.
pub async fn toolchain_version() -> String {
    let output = match Command::new("rustc").arg("--version").output().await {
        Ok(output) if output.status.success() => output.stdout,
        _ => return UNKNOWN_VERSION.to_string(),
    };

    match String::from_utf8(output) {
        Ok(version) if !version.trim().is_empty() => version.trim().to_string(),
        _ => UNKNOWN_VERSION.to_string(),
    }
}

/// Handle one request: every GET gets the greeting, anything else is
/// refused.
pub async fn handle(request: Request) -> Result<Response, Error> {
    if request.method != Method::Get {
        return Ok(Response::new(StatusCode::MethodNotAllowed)
            .header("Allow", "GET")
            .text(format!(
                "method {method} not allowed",
                method = request.method
            )));
    }

    let greeting = Greeting::for_target(request.target).await;
    Ok(Response::new(StatusCode::Ok).json(&greeting)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get(target: &str) -> Request {
        let raw = format!("GET {target} HTTP/1.1\r\nHost: localhost\r\n\r\n");
        Request::parse(raw.as_bytes()).unwrap()
    }

    #[tokio::test]
    async fn greeting_echoes_target_verbatim() {
        let greeting = Greeting::for_target("/hello?x=1").await;
        assert_eq!(greeting.message, GREETING_MESSAGE);
        assert_eq!(greeting.path, "/hello?x=1");
    }

    #[tokio::test]
    async fn greeting_serializes_keys_in_wire_order() {
        let greeting = Greeting::for_target("/").await;
        let json = serde_json::to_string(&greeting).unwrap();

        let message = json.find("\"message\"").unwrap();
        let version = json.find("\"python_version\"").unwrap();
        let path = json.find("\"path\"").unwrap();
        assert!(message < version && version < path);
    }

    #[tokio::test]
    async fn toolchain_version_is_trimmed_and_non_empty() {
        let version = toolchain_version().await;
        assert!(!version.is_empty());
        assert_eq!(version, version.trim());
    }

    #[tokio::test]
    async fn get_request_receives_json_greeting() {
        let response = handle(get("/hello?x=1")).await.unwrap();
        assert_eq!(response.status, StatusCode::Ok);
        assert_eq!(
            response.headers.get("Content-Type").unwrap(),
            "application/json"
        );

        let body: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
        let object = body.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(object["message"], GREETING_MESSAGE);
        assert_eq!(object["path"], "/hello?x=1");
        assert!(object["python_version"].is_string());
    }

    #[tokio::test]
    async fn json_body_is_pretty_printed() {
        let response = handle(get("/")).await.unwrap();
        let body = String::from_utf8(response.body).unwrap();
        assert!(body.starts_with("{\n  \"message\""));
    }

    #[tokio::test]
    async fn non_get_method_is_refused() {
        let raw = b"POST /hello HTTP/1.1\r\nHost: localhost\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        let response = handle(request).await.unwrap();
        assert_eq!(response.status, StatusCode::MethodNotAllowed);
        assert_eq!(response.headers.get("Allow").unwrap(), "GET");
    }
}
