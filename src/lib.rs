//! themekit configuration library
//!
//! Resolves the configuration used by the theme asset client: command-line
//! flags, `THEMEKIT_*` environment variables, the TOML config file and
//! built-in defaults, merged in that order of precedence and validated.
//!
//! # Modules
//!
//! - `config`: Configuration record, resolution, validation and API endpoints
//! - `cli`: Command-line flags and subcommands for the `theme` binary
//! - `logging`: Tracing subscriber setup

pub mod cli;
pub mod config;
pub mod logging;

// Re-export config types
pub use config::{ConfigError, ConfigResult, ConfigSources, Configuration};
