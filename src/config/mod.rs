//! Configuration module for themekit.
//!
//! A [`Configuration`] is resolved from four sources, highest precedence first:
//!
//! 1. Command-line flags
//! 2. `THEMEKIT_*` environment variables
//! 3. The TOML config file (`config.toml` by default)
//! 4. Built-in defaults
//!
//! A field left at its zero value by one source is taken from the next. The
//! merged value is then validated: a theme id (numeric, or `live`), a
//! `*.myshopify.com` / `*.myshopify.io` domain and a password are required.
//!
//! # Environment Overrides
//!
//! - `THEMEKIT_PASSWORD`, `THEMEKIT_THEME_ID`, `THEMEKIT_DOMAIN`
//! - `THEMEKIT_DIRECTORY`, `THEMEKIT_PROXY`, `THEMEKIT_TIMEOUT` (e.g. `30s`, `1m 30s`)
//! - `THEMEKIT_BUCKET_SIZE`, `THEMEKIT_REFILL_RATE`, `THEMEKIT_CONCURRENCY`
//! - `THEMEKIT_IGNORE_FILES`, `THEMEKIT_IGNORES` (`:`-separated lists)
//!
//! # Example
//!
//! ```rust,ignore
//! use themekit::config::{ConfigSources, Configuration};
//!
//! let sources = ConfigSources::from_process(Configuration::default())?;
//! let file = Configuration::load_optional("config.toml")?;
//! let config = sources.resolve(&file)?;
//!
//! println!("Assets: {}", config.asset_path());
//! ```

mod api;
pub mod env;
mod error;
mod loader;
mod merge;
mod resolver;
mod schema;
mod validate;

pub use api::{ACCESS_TOKEN_HEADER, LIVE_THEME};
pub use error::{ConfigError, ConfigResult};
pub use loader::CONFIG_FILE_NAME;
pub use resolver::ConfigSources;
pub use schema::{
    Configuration, DEFAULT_BUCKET_SIZE, DEFAULT_CONCURRENCY, DEFAULT_REFILL_RATE, DEFAULT_TIMEOUT,
};
pub use validate::DOMAIN_SUFFIXES;
