//! Configuration value object read by the factory and the service.

use http::header::{HeaderMap, HeaderName, HeaderValue};
use url::Url;

use crate::transport::HttpError;

/// Options for building an HTTP use case.
///
/// The presence of [`client`](Self::client) alone decides which transport
/// the factory wires in. The remaining fields shape every request the
/// resulting service sends.
///
/// # Example
///
/// ```
/// use http_usecase::HttpClientOptions;
/// use url::Url;
///
/// let options = HttpClientOptions::new()
///     .with_base_url(Url::parse("https://api.example.com/v1/").unwrap());
///
/// assert!(!options.has_client());
/// assert_eq!(
///     options.resolve_url("users/7").unwrap().as_str(),
///     "https://api.example.com/v1/users/7"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct HttpClientOptions {
    /// Pre-configured client to send requests through.
    ///
    /// `None` selects the standalone default transport.
    pub client: Option<reqwest::Client>,

    /// Base for relative request paths.
    ///
    /// Joined with `Url::join` rules: keep the trailing slash
    /// (`.../v1/`) or the last segment is replaced.
    pub base_url: Option<Url>,

    /// Headers added to every request that does not already set them.
    pub headers: HeaderMap,
}

impl HttpClientOptions {
    /// Empty options: no external client, no base URL, no default headers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Supplies an external client.
    #[must_use]
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Sets the base URL for relative paths.
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets a default header, replacing any earlier value for `name`.
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Whether an external client was supplied.
    #[must_use]
    pub const fn has_client(&self) -> bool {
        self.client.is_some()
    }

    /// Turns a request target into an absolute URL.
    ///
    /// Absolute URLs are returned unchanged. Anything else is treated as
    /// a path relative to [`base_url`](Self::base_url).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidUrl`] when `target` is relative and no
    /// base URL is set, when joining fails, or when `target` is malformed.
    pub fn resolve_url(&self, target: &str) -> Result<Url, HttpError> {
        match Url::parse(target) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let base = self.base_url.as_ref().ok_or_else(|| {
                    HttpError::InvalidUrl(format!("relative path '{target}' requires a base URL"))
                })?;
                base.join(target).map_err(|e| {
                    HttpError::InvalidUrl(format!("cannot join '{target}' onto '{base}': {e}"))
                })
            }
            Err(e) => Err(HttpError::InvalidUrl(format!("'{target}': {e}"))),
        }
    }
}
