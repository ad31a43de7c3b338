//! Default values for configuration options.

/// HTTP method used when none is configured.
pub const METHOD: &str = "GET";

/// File written by `init` when no output path is given.
pub const CONFIG_FILE: &str = "http-usecase.toml";
