//! Configuration layer for the `http-usecase` binary.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments**
//! 2. **TOML config file**
//! 3. **Built-in defaults**
//!
//! Headers are merged per name: a `--header` replaces a `[client.headers]`
//! entry with the same name and leaves the others in place.
//!
//! `--no-proxy` uses OR semantics with `client.no_proxy`: either source can
//! enable it, neither can disable it.
//!
//! # Transport Selection
//!
//! A user agent or `no_proxy` makes the runner build a pre-configured
//! `reqwest::Client` and hand it to the factory, which selects the adapter
//! transport. With neither set, the default transport is used.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod cli_tests;

pub use self::toml::{TomlConfig, default_config_template};
pub use cli::{Cli, Command};
pub use error::{ConfigError, field};
pub use validated::{ValidatedConfig, write_default_config};
