//! Validated configuration after merging CLI and TOML sources.
//!
//! All validation happens during construction, so the runner only deals
//! with values it can use directly.

use std::fmt;
use std::path::Path;

use http::header::{HeaderName, HeaderValue, USER_AGENT};
use http::{HeaderMap, Method};
use url::Url;

use crate::service::HttpClientOptions;
use crate::transport::HttpError;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// Use [`ValidatedConfig::from_raw`] to build it from CLI args and an
/// optional TOML config.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Request target as configured (absolute or relative)
    pub target: String,

    /// Target resolved against `base_url`
    pub url: Url,

    /// Base URL for relative targets
    pub base_url: Option<Url>,

    /// HTTP method
    pub method: Method,

    /// Default headers
    pub headers: HeaderMap,

    /// Raw request body
    pub body: Option<Vec<u8>>,

    /// User agent for a pre-configured client
    pub user_agent: Option<HeaderValue>,

    /// Bypass system proxies with a pre-configured client
    pub no_proxy: bool,

    /// Dry-run mode (log the request without sending it)
    pub dry_run: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base_url = self
            .base_url
            .as_ref()
            .map_or_else(|| "none".to_string(), ToString::to_string);

        write!(
            f,
            "Config {{ method: {}, url: {}, base_url: {}, headers: {}, body: {} bytes, \
             custom_client: {}, dry_run: {} }}",
            self.method,
            self.url,
            base_url,
            self.headers.len(),
            self.body.as_ref().map_or(0, Vec::len),
            self.needs_custom_client(),
            self.dry_run,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The request target is missing
    /// - The base URL or target cannot be parsed, or a relative target has
    ///   no base URL
    /// - The method, a header or the user agent is invalid
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let base_url = Self::resolve_base_url(cli, toml)?;

        let target = cli
            .url
            .clone()
            .or_else(|| toml.and_then(|t| t.request.url.clone()))
            .ok_or_else(|| {
                ConfigError::missing(field::URL, "Use --url or set request.url in config file")
            })?;

        let url = resolve_target(&target, base_url.as_ref())?;

        let method = Self::resolve_method(cli, toml)?;

        let headers = Self::resolve_headers(cli, toml)?;

        // Priority: CLI explicit > TOML
        let body = cli
            .body
            .clone()
            .or_else(|| toml.and_then(|t| t.request.body.clone()))
            .map(String::into_bytes);

        let user_agent = Self::resolve_user_agent(cli, toml)?;

        // Flags only enable
        let no_proxy = cli.no_proxy || toml.is_some_and(|t| t.client.no_proxy);

        Ok(Self {
            target,
            url,
            base_url,
            method,
            headers,
            body,
            user_agent,
            no_proxy,
            dry_run: cli.dry_run,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed, or the
    /// merged configuration is invalid.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    /// Whether any setting requires a pre-configured client.
    #[must_use]
    pub const fn needs_custom_client(&self) -> bool {
        self.user_agent.is_some() || self.no_proxy
    }

    /// Options for the request use case, without an external client.
    #[must_use]
    pub fn client_options(&self) -> HttpClientOptions {
        HttpClientOptions {
            client: None,
            base_url: self.base_url.clone(),
            headers: self.headers.clone(),
        }
    }

    fn resolve_base_url(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Option<Url>, ConfigError> {
        let Some(base) = cli
            .base_url
            .as_deref()
            .or_else(|| toml.and_then(|t| t.client.base_url.as_deref()))
        else {
            return Ok(None);
        };

        Url::parse(base)
            .map(Some)
            .map_err(|e| ConfigError::InvalidUrl {
                url: base.to_string(),
                reason: e.to_string(),
            })
    }

    fn resolve_method(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Method, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let method_str = cli
            .method
            .as_deref()
            .or_else(|| toml.and_then(|t| t.request.method.as_deref()))
            .unwrap_or(defaults::METHOD);

        method_str
            .to_uppercase()
            .parse::<Method>()
            .map_err(|_| ConfigError::InvalidMethod(method_str.to_string()))
    }

    fn resolve_headers(cli: &Cli, toml: Option<&TomlConfig>) -> Result<HeaderMap, ConfigError> {
        let mut headers = HeaderMap::new();

        // TOML first so CLI can override
        if let Some(toml) = toml {
            for (name, value) in &toml.client.headers {
                headers.insert(parse_header_name(name)?, parse_header_value(name, value)?);
            }
        }

        for header_str in &cli.headers {
            let (name, value) = parse_header_string(header_str)?;
            headers.insert(parse_header_name(&name)?, parse_header_value(&name, &value)?);
        }

        Ok(headers)
    }

    fn resolve_user_agent(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Option<HeaderValue>, ConfigError> {
        cli.user_agent
            .as_deref()
            .or_else(|| toml.and_then(|t| t.client.user_agent.as_deref()))
            .map(|agent| parse_header_value(USER_AGENT.as_str(), agent))
            .transpose()
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn resolve_target(target: &str, base_url: Option<&Url>) -> Result<Url, ConfigError> {
    let options = HttpClientOptions {
        base_url: base_url.cloned(),
        ..HttpClientOptions::default()
    };

    options.resolve_url(target).map_err(|e| {
        let reason = match e {
            HttpError::InvalidUrl(reason) => reason,
            other => other.to_string(),
        };
        ConfigError::InvalidUrl {
            url: target.to_string(),
            reason,
        }
    })
}

fn parse_header_string(s: &str) -> Result<(String, String), ConfigError> {
    // "Key=Value" or "Key: Value"; the first separator wins, so values may
    // contain the other one (base64 padding, URLs, cookies)
    let Some(pos) = s.find(['=', ':']) else {
        return Err(ConfigError::InvalidHeader {
            value: s.to_string(),
        });
    };

    let (name, value) = s.split_at(pos);
    Ok((name.trim().to_string(), value[1..].trim().to_string()))
}

fn parse_header_name(name: &str) -> Result<HeaderName, ConfigError> {
    name.parse::<HeaderName>()
        .map_err(|e| ConfigError::InvalidHeaderName {
            name: name.to_string(),
            reason: e.to_string(),
        })
}

fn parse_header_value(name: &str, value: &str) -> Result<HeaderValue, ConfigError> {
    HeaderValue::from_str(value).map_err(|e| ConfigError::InvalidHeaderValue {
        name: name.to_string(),
        reason: e.to_string(),
    })
}
