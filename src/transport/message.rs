//! Request/response value types and the transport capability trait.

use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::{Method, StatusCode};
use url::Url;

use super::HttpError;

/// An outgoing HTTP request.
///
/// Plain data: any [`HttpClient`] can send it, and the service layer
/// adjusts it (default headers) before handing it to a transport.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Request method
    pub method: Method,
    /// Absolute target URL
    pub url: Url,
    /// Headers to send
    pub headers: HeaderMap,
    /// Raw request body
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Creates a request with no headers and no body.
    #[must_use]
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Shorthand for a `GET` request.
    #[must_use]
    pub fn get(url: Url) -> Self {
        Self::new(Method::GET, url)
    }

    /// Shorthand for a `POST` request.
    #[must_use]
    pub fn post(url: Url) -> Self {
        Self::new(Method::POST, url)
    }

    /// Shorthand for a `PUT` request.
    #[must_use]
    pub fn put(url: Url) -> Self {
        Self::new(Method::PUT, url)
    }

    /// Shorthand for a `DELETE` request.
    #[must_use]
    pub fn delete(url: Url) -> Self {
        Self::new(Method::DELETE, url)
    }

    /// Sets the raw body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Appends a header value. Repeated names keep every value.
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Copies each header from `defaults` whose name is not already set.
    ///
    /// Headers set on the request always win; a default name with several
    /// values is copied with all of them.
    pub fn merge_default_headers(&mut self, defaults: &HeaderMap) {
        for name in defaults.keys() {
            if self.headers.contains_key(name) {
                continue;
            }
            for value in defaults.get_all(name) {
                self.headers.append(name.clone(), value.clone());
            }
        }
    }
}

/// A received HTTP response with a fully buffered body.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a response from its parts.
    #[must_use]
    pub const fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// True for 2xx statuses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// The body as UTF-8, or `None` if it is not valid UTF-8.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }

    /// First value of a header, if present and visible ASCII.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Capability for performing HTTP calls.
///
/// Both transport variants ([`DefaultClient`] and [`ClientAdapter`])
/// implement this, as does the [`Transport`] enum the factory hands to the
/// service. Tests substitute their own implementations.
///
/// # Example
///
/// ```
/// use http_usecase::transport::{HttpClient, HttpError, HttpRequest, HttpResponse};
///
/// struct Canned(HttpResponse);
///
/// impl HttpClient for Canned {
///     async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
///
/// [`DefaultClient`]: super::DefaultClient
/// [`ClientAdapter`]: super::ClientAdapter
/// [`Transport`]: super::Transport
pub trait HttpClient: Send + Sync {
    /// Sends `req` and buffers the response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request cannot be completed:
    /// connection failure ([`HttpError::Connection`]), timeout
    /// ([`HttpError::Timeout`]) or a request the client refuses to build
    /// ([`HttpError::InvalidUrl`]). Non-2xx statuses are not errors.
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}
