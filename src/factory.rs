//! Composition root for the HTTP use case.

use crate::logger::TracingLogger;
use crate::service::{HttpClientOptions, HttpService, HttpUseCase};
use crate::transport::{Transport, TransportKind};

#[cfg(test)]
#[path = "factory_tests.rs"]
mod tests;

/// Builds fully wired [`HttpUseCase`] instances.
///
/// # Example
///
/// ```no_run
/// use http_usecase::{HttpClientOptions, HttpFactory, HttpUseCase};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// // No external client: the standalone default transport is used.
/// let http = HttpFactory::create_http_request(HttpClientOptions::new());
/// let response = http.get("https://example.com/").await?;
///
/// // A pre-configured client is wrapped by the adapter transport.
/// let client = reqwest::Client::builder().user_agent("probe/1.0").build()?;
/// let http = HttpFactory::create_http_request(HttpClientOptions::new().with_client(client));
/// let response = http.get("https://example.com/").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpFactory;

impl HttpFactory {
    /// Wires a logger, the transport selected by `options`, and the
    /// options themselves into an [`HttpUseCase`].
    ///
    /// No I/O happens and nothing is logged here. Each call builds an
    /// independent object graph.
    ///
    /// # Panics
    ///
    /// Panics if the default transport is selected and reqwest cannot
    /// initialise its TLS backend.
    #[must_use]
    pub fn create_http_request(options: HttpClientOptions) -> impl HttpUseCase {
        Self::wire(options)
    }

    /// The transport variant [`create_http_request`](Self::create_http_request)
    /// picks for `options`.
    #[must_use]
    pub const fn transport_kind(options: &HttpClientOptions) -> TransportKind {
        if options.has_client() {
            TransportKind::Adapter
        } else {
            TransportKind::Default
        }
    }

    fn wire(options: HttpClientOptions) -> HttpService<Transport, TracingLogger> {
        let logger = TracingLogger::new();
        let transport = Transport::select(options.client.clone());
        HttpService::new(options, transport, logger)
    }
}
