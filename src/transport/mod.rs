//! Transport layer: the capability of issuing HTTP calls.
//!
//! This module provides:
//! - Request/response value types ([`HttpRequest`], [`HttpResponse`])
//! - The transport capability trait ([`HttpClient`])
//! - The standalone transport ([`DefaultClient`])
//! - The adapter over a caller-supplied client ([`ClientAdapter`])
//! - The selected variant handed to the service ([`Transport`])

mod client;
mod error;
mod message;
mod selected;


pub use client::{ClientAdapter, DefaultClient};
pub use error::HttpError;
pub use message::{HttpClient, HttpRequest, HttpResponse};
pub use selected::{Transport, TransportKind};
