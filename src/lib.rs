//! http-usecase: HTTP request use case with pluggable transports
//!
//! [`HttpFactory`] builds an [`HttpUseCase`] from [`HttpClientOptions`].
//! When the options carry a pre-configured `reqwest::Client`, requests go
//! through an adapter wrapping it; otherwise a standalone default client is
//! used.

pub mod config;
mod factory;
pub mod logger;
pub mod service;
pub mod transport;

#[cfg(test)]
mod test_server;

pub use factory::HttpFactory;
pub use service::{HttpClientOptions, HttpService, HttpUseCase};
