//! Transport error type.

use thiserror::Error;

/// Failure to complete an HTTP call.
///
/// A response with a non-2xx status is not an error at this layer; it is
/// returned as an [`HttpResponse`](super::HttpResponse) for the caller to
/// inspect.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The request could not reach the server or the response could not be
    /// read (DNS failure, refused connection, reset mid-body, ...).
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The underlying client gave up waiting.
    ///
    /// Only raised when the caller-supplied client has a timeout configured;
    /// the default transport sets none.
    #[error("Request timed out")]
    Timeout,

    /// The target could not be turned into a request: a relative path with
    /// no base URL, a failed join, or a URL the client rejects.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl HttpError {
    /// Wraps any error as a connection failure.
    pub fn connection<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Connection(Box::new(error))
    }
}
