//! `HttpService`: the use case over an injected transport and logger.

use http::Method;

use crate::logger::Logger;
use crate::transport::{HttpClient, HttpError, HttpRequest, HttpResponse};

use super::{HttpClientOptions, HttpUseCase};

/// Runs requests through a transport, applying the configured options and
/// logging each outcome.
///
/// # Type Parameters
///
/// - `T`: the transport ([`Transport`](crate::transport::Transport) when
///   built by the factory)
/// - `L`: the logger ([`TracingLogger`](crate::logger::TracingLogger) when
///   built by the factory)
///
/// Construction does no I/O and logs nothing.
#[derive(Debug)]
pub struct HttpService<T, L> {
    options: HttpClientOptions,
    transport: T,
    logger: L,
}

impl<T, L> HttpService<T, L> {
    /// Assembles the service from its three collaborators.
    #[must_use]
    pub const fn new(options: HttpClientOptions, transport: T, logger: L) -> Self {
        Self {
            options,
            transport,
            logger,
        }
    }

    /// The options the service was built with.
    #[must_use]
    pub const fn options(&self) -> &HttpClientOptions {
        &self.options
    }

    /// The injected transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// The injected logger.
    #[must_use]
    pub const fn logger(&self) -> &L {
        &self.logger
    }
}

impl<T: HttpClient, L: Logger> HttpUseCase for HttpService<T, L> {
    async fn request(&self, mut req: HttpRequest) -> Result<HttpResponse, HttpError> {
        req.merge_default_headers(&self.options.headers);

        let method = req.method.clone();
        let url = req.url.clone();
        self.logger.debug(&format!("--> {method} {url}"));

        match self.transport.request(req).await {
            Ok(response) => {
                let line = format!("<-- {method} {url} {}", response.status);
                if response.is_success() {
                    self.logger.info(&line);
                } else {
                    self.logger.warn(&line);
                }
                Ok(response)
            }
            Err(e) => {
                self.logger.error(&format!("<-x {method} {url}: {e}"));
                Err(e)
            }
        }
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<HttpResponse, HttpError> {
        let url = self.options.resolve_url(path).inspect_err(|e| {
            self.logger.error(&format!("<-x {method} {path}: {e}"));
        })?;

        let mut req = HttpRequest::new(method, url);
        req.body = body;

        self.request(req).await
    }
}
