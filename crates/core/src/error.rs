/// Caller-facing failure kinds. Deliberately carry no upstream detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Network, upstream status or payload failure on the picture path.
    #[error("failed to fetch APOD data")]
    PictureFetchFailed,

    /// Network, upstream status or payload failure on the commentary path.
    #[error("failed to generate commentary")]
    CommentaryFetchFailed,
}

/// What actually went wrong on an outbound call. Logged, never returned
/// to a client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpstreamError {
    /// The call exceeded the configured timeout.
    #[error("upstream request timed out")]
    Timeout,

    /// Upstream answered with a non-success status.
    #[error("upstream returned HTTP {0}")]
    Status(u16),

    /// Connection, DNS, TLS or other transport failure.
    #[error("upstream network error: {0}")]
    Network(String),

    /// Response body did not match the expected schema.
    #[error("malformed upstream response: {0}")]
    Malformed(String),

    /// No credential configured for this upstream.
    #[error("no credential configured for {0}")]
    MissingCredential(&'static str),
}
