//! The HTTP request use case.

use std::future::Future;

use http::Method;

use crate::transport::{HttpError, HttpRequest, HttpResponse};

/// Something that runs HTTP requests on behalf of the application.
///
/// [`HttpFactory::create_http_request`](crate::HttpFactory::create_http_request)
/// returns an implementation of this trait; callers never name the
/// concrete type.
///
/// Only [`request`](Self::request) and [`execute`](Self::execute) need
/// implementing. The verb helpers resolve `path` the same way `execute`
/// does.
pub trait HttpUseCase: Send + Sync {
    /// Sends a fully built request.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`HttpError`] unchanged.
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, HttpError>> + Send;

    /// Resolves `path`, builds a request with `method` and `body`, and
    /// sends it.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidUrl`] if `path` cannot be resolved,
    /// otherwise whatever [`request`](Self::request) returns.
    fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> impl Future<Output = Result<HttpResponse, HttpError>> + Send;

    /// `GET path`.
    fn get(&self, path: &str) -> impl Future<Output = Result<HttpResponse, HttpError>> + Send {
        self.execute(Method::GET, path, None)
    }

    /// `DELETE path`.
    fn delete(&self, path: &str) -> impl Future<Output = Result<HttpResponse, HttpError>> + Send {
        self.execute(Method::DELETE, path, None)
    }

    /// `POST path` with a raw body.
    fn post(
        &self,
        path: &str,
        body: impl Into<Vec<u8>>,
    ) -> impl Future<Output = Result<HttpResponse, HttpError>> + Send {
        self.execute(Method::POST, path, Some(body.into()))
    }

    /// `PUT path` with a raw body.
    fn put(
        &self,
        path: &str,
        body: impl Into<Vec<u8>>,
    ) -> impl Future<Output = Result<HttpResponse, HttpError>> + Send {
        self.execute(Method::PUT, path, Some(body.into()))
    }

    /// `PATCH path` with a raw body.
    fn patch(
        &self,
        path: &str,
        body: impl Into<Vec<u8>>,
    ) -> impl Future<Output = Result<HttpResponse, HttpError>> + Send {
        self.execute(Method::PATCH, path, Some(body.into()))
    }
}
