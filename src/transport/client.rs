//! The two reqwest-backed transport variants.

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Standalone transport owning its own `reqwest::Client`.
///
/// Needs nothing from the caller. Uses reqwest's stock configuration:
/// connection pooling, system proxies, no request timeout.
#[derive(Debug, Clone)]
pub struct DefaultClient {
    inner: reqwest::Client,
}

impl DefaultClient {
    /// Creates the transport with a fresh `reqwest::Client`.
    ///
    /// # Panics
    ///
    /// Panics if reqwest cannot initialise its TLS backend, the same way
    /// `reqwest::Client::new` does.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }
}

impl Default for DefaultClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for DefaultClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        send_with(&self.inner, req).await
    }
}

/// Transport delegating to a caller-supplied, pre-configured client.
///
/// The client is used exactly as given, so its default headers, proxy,
/// timeouts and TLS settings all apply. `reqwest::Client` is reference
/// counted: the adapter and the caller share one connection pool.
///
/// # Example
///
/// ```no_run
/// use http_usecase::transport::{ClientAdapter, HttpClient, HttpRequest};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let configured = reqwest::Client::builder().user_agent("probe/1.0").build()?;
/// let adapter = ClientAdapter::new(configured);
/// let response = adapter
///     .request(HttpRequest::get(Url::parse("https://example.com/")?))
///     .await?;
/// println!("{}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ClientAdapter {
    inner: reqwest::Client,
}

impl ClientAdapter {
    /// Wraps `client` without altering it.
    #[must_use]
    pub const fn new(client: reqwest::Client) -> Self {
        Self { inner: client }
    }

    /// The wrapped client.
    #[must_use]
    pub const fn inner(&self) -> &reqwest::Client {
        &self.inner
    }
}

impl HttpClient for ClientAdapter {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        send_with(&self.inner, req).await
    }
}

/// Sends `req` through `client` and buffers the whole response.
async fn send_with(client: &reqwest::Client, req: HttpRequest) -> Result<HttpResponse, HttpError> {
    let mut builder = client.request(req.method, req.url.as_str());

    for (name, value) in &req.headers {
        builder = builder.header(name, value);
    }

    if let Some(body) = req.body {
        builder = builder.body(body);
    }

    let response = builder.send().await.map_err(map_send_error)?;

    let status = response.status();
    let headers = response.headers().clone();
    let body = response
        .bytes()
        .await
        .map_err(HttpError::connection)?
        .to_vec();

    Ok(HttpResponse::new(status, headers, body))
}

fn map_send_error(error: reqwest::Error) -> HttpError {
    if error.is_timeout() {
        HttpError::Timeout
    } else if error.is_builder() {
        HttpError::InvalidUrl(error.to_string())
    } else {
        HttpError::connection(error)
    }
}
