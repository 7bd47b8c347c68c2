//! Outbound HTTP plumbing shared by the gateway and the client.
//!
//! `ureq` is synchronous, so every call runs inside
//! `tokio::task::spawn_blocking` and the calling task suspends instead of
//! blocking the runtime.

use std::time::Duration;

use crate::error::UpstreamError;

/// Build an agent whose every request is bounded by `timeout`.
pub fn agent(timeout: Duration) -> ureq::Agent {
    ureq::Agent::config_builder()
        .timeout_global(Some(timeout))
        .build()
        .into()
}

/// Map a `ureq` failure onto the upstream error kinds we log.
pub fn classify(err: ureq::Error) -> UpstreamError {
    match err {
        ureq::Error::StatusCode(code) => UpstreamError::Status(code),
        ureq::Error::Timeout(_) => UpstreamError::Timeout,
        ureq::Error::Json(e) => UpstreamError::Malformed(e.to_string()),
        ureq::Error::Io(e) if e.kind() == std::io::ErrorKind::TimedOut => UpstreamError::Timeout,
        other => UpstreamError::Network(other.to_string()),
    }
}

/// Run a blocking HTTP exchange off the async runtime.
pub async fn run_blocking<T, F>(call: F) -> Result<T, UpstreamError>
where
    F: FnOnce() -> Result<T, UpstreamError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(call)
        .await
        .map_err(|e| UpstreamError::Network(format!("task join error: {}", e)))?
}

/// Join a base URL and a path without doubling or dropping the slash.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
