//! Application layer: the HTTP use case and its implementation.
//!
//! This module provides:
//! - The use-case contract ([`HttpUseCase`])
//! - Its implementation over injected collaborators ([`HttpService`])
//! - The configuration value object ([`HttpClientOptions`])

mod options;
#[allow(clippy::module_inception)]
mod service;
mod usecase;


pub use options::HttpClientOptions;
pub use service::HttpService;
pub use usecase::HttpUseCase;
