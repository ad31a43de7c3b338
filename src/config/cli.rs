//! CLI argument parsing using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::defaults;

/// http-usecase: send one HTTP request through the request use case
///
/// Supplying any client setting (`--user-agent`, `--no-proxy`) builds a
/// pre-configured client and routes the request through the adapter
/// transport; otherwise the standalone default transport is used.
#[derive(Debug, Parser)]
#[command(name = "http-usecase")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Request target: an absolute URL, or a path relative to --base-url
    #[arg(long)]
    pub url: Option<String>,

    /// Base URL that relative targets are joined onto
    #[arg(long = "base-url")]
    pub base_url: Option<String>,

    /// HTTP method
    #[arg(long)]
    pub method: Option<String>,

    /// Default headers in 'Key=Value' or 'Key: Value' format (repeatable)
    #[arg(long = "header", value_name = "K=V")]
    pub headers: Vec<String>,

    /// Raw request body
    #[arg(long)]
    pub body: Option<String>,

    /// User agent for a pre-configured client
    #[arg(long = "user-agent")]
    pub user_agent: Option<String>,

    /// Bypass system proxies with a pre-configured client
    #[arg(long = "no-proxy")]
    pub no_proxy: bool,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Log the request that would be sent without sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for http-usecase
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
