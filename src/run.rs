//! Application execution logic.
//!
//! Turns a validated configuration into factory options, sends the one
//! configured request, and writes the response body to stdout.

use std::io::Write;

use thiserror::Error;

use http_usecase::config::ValidatedConfig;
use http_usecase::transport::{HttpError, HttpResponse};
use http_usecase::{HttpClientOptions, HttpFactory, HttpUseCase};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to build the pre-configured client.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// The request could not be completed.
    #[error("Request failed: {0}")]
    Request(#[from] HttpError),

    /// The server answered with a non-2xx status.
    #[error("Server responded with {status}")]
    NonSuccessStatus {
        /// Status returned by the server
        status: http::StatusCode,
    },

    /// Failed to write the response body.
    #[error("Failed to write response: {0}")]
    Output(#[source] std::io::Error),
}

/// Sends the configured request and prints the response body.
///
/// # Errors
///
/// Returns an error if:
/// - The pre-configured client cannot be built
/// - The request fails at the transport level
/// - The response status is not 2xx (the body is still printed)
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let options = build_options(&config)?;
    tracing::debug!("Transport: {}", HttpFactory::transport_kind(&options));

    if config.dry_run {
        tracing::info!(
            "Dry-run mode - would send {} {} ({} bytes)",
            config.method,
            config.url,
            config.body.as_ref().map_or(0, Vec::len)
        );
        return Ok(());
    }

    let use_case = HttpFactory::create_http_request(options);
    let response = use_case
        .execute(config.method.clone(), &config.target, config.body.clone())
        .await?;

    write_response(&mut std::io::stdout().lock(), &response).map_err(RunError::Output)?;

    if response.is_success() {
        Ok(())
    } else {
        Err(RunError::NonSuccessStatus {
            status: response.status,
        })
    }
}

/// Builds factory options, adding a pre-configured client when any client
/// setting is present.
fn build_options(config: &ValidatedConfig) -> Result<HttpClientOptions, RunError> {
    let options = config.client_options();

    if !config.needs_custom_client() {
        return Ok(options);
    }

    let client = build_client(config).map_err(RunError::ClientBuild)?;
    Ok(options.with_client(client))
}

fn build_client(config: &ValidatedConfig) -> reqwest::Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder();

    if let Some(agent) = &config.user_agent {
        builder = builder.user_agent(agent.clone());
    }

    if config.no_proxy {
        builder = builder.no_proxy();
    }

    builder.build()
}

/// Writes the body, ending with a newline.
fn write_response(out: &mut impl Write, response: &HttpResponse) -> std::io::Result<()> {
    out.write_all(&response.body)?;
    if !response.body.ends_with(b"\n") {
        out.write_all(b"\n")?;
    }
    out.flush()
}
