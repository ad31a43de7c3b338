//! TOML configuration file parsing.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional so the file can be partial and merged with CLI
/// arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// What to send
    #[serde(default)]
    pub request: RequestSection,

    /// How to send it
    #[serde(default)]
    pub client: ClientSection,
}

/// Request section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RequestSection {
    /// Absolute URL or path relative to `client.base_url`
    pub url: Option<String>,

    /// HTTP method (default: GET)
    pub method: Option<String>,

    /// Raw request body
    pub body: Option<String>,
}

/// Client section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientSection {
    /// Base URL for relative request targets
    pub base_url: Option<String>,

    /// Default headers as key-value pairs
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// User agent for a pre-configured client
    pub user_agent: Option<String>,

    /// Bypass system proxies with a pre-configured client
    #[serde(default)]
    pub no_proxy: bool,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# http-usecase configuration file

[request]
# Request target (required): absolute URL, or a path relative to client.base_url
# url = "users/42"

# HTTP method (default: GET, can be overridden by --method)
# method = "GET"

# Raw request body
# body = "hello"

[client]
# Base URL that relative targets are joined onto.
# Keep the trailing slash, otherwise the last path segment is replaced.
# base_url = "https://api.example.com/v1/"

# Setting any of the following builds a pre-configured client,
# which the request is then sent through.
# user_agent = "http-usecase/0.1"
# no_proxy = false

# Default headers, added when the request does not set them
# [client.headers]
# X-Api-Key = "value"
"#
    .to_string()
}
