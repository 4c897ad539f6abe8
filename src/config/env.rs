//! Environment source: one `THEMEKIT_*` variable per field.
//!
//! List variables separate entries with `:`; empty entries are dropped.
//! Empty variables count as unset.

use super::error::{ConfigError, ConfigResult};
use super::schema::Configuration;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "THEMEKIT";

/// Separator between entries of list-valued variables
pub const LIST_SEPARATOR: char = ':';

pub const PASSWORD_VAR: &str = "THEMEKIT_PASSWORD";
pub const THEME_ID_VAR: &str = "THEMEKIT_THEME_ID";
pub const DOMAIN_VAR: &str = "THEMEKIT_DOMAIN";
pub const DIRECTORY_VAR: &str = "THEMEKIT_DIRECTORY";
pub const IGNORE_FILES_VAR: &str = "THEMEKIT_IGNORE_FILES";
pub const BUCKET_SIZE_VAR: &str = "THEMEKIT_BUCKET_SIZE";
pub const REFILL_RATE_VAR: &str = "THEMEKIT_REFILL_RATE";
pub const CONCURRENCY_VAR: &str = "THEMEKIT_CONCURRENCY";
pub const PROXY_VAR: &str = "THEMEKIT_PROXY";
pub const IGNORES_VAR: &str = "THEMEKIT_IGNORES";
pub const TIMEOUT_VAR: &str = "THEMEKIT_TIMEOUT";

impl Configuration {
    /// Build the environment source from the process environment.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_env_with(|name| std::env::var(name).ok())
    }

    /// Build the environment source from an arbitrary variable lookup.
    pub fn from_env_with<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_env_under(lookup, &Configuration::default())
    }

    /// Build the environment source beneath an already known flag source.
    ///
    /// A variable that fails to parse is an error, unless `flags` already sets
    /// that field: the value could never win, so it is logged and left unset.
    pub fn from_env_under<F>(lookup: F, flags: &Configuration) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let mut config = Configuration::default();
        if let Some(val) = get(PASSWORD_VAR) {
            config.password = val;
        }
        if let Some(val) = get(THEME_ID_VAR) {
            config.theme_id = val;
        }
        if let Some(val) = get(DOMAIN_VAR) {
            config.domain = val;
        }
        if let Some(val) = get(DIRECTORY_VAR) {
            config.directory = PathBuf::from(val);
        }
        if let Some(val) = get(IGNORE_FILES_VAR) {
            config.ignored_files = split_list(&val);
        }
        if let Some(val) = get(BUCKET_SIZE_VAR) {
            config.bucket_size = masked(parse_count(BUCKET_SIZE_VAR, &val), flags.bucket_size != 0)?;
        }
        if let Some(val) = get(REFILL_RATE_VAR) {
            config.refill_rate = masked(parse_count(REFILL_RATE_VAR, &val), flags.refill_rate != 0)?;
        }
        if let Some(val) = get(CONCURRENCY_VAR) {
            config.concurrency = masked(parse_count(CONCURRENCY_VAR, &val), flags.concurrency != 0)?;
        }
        if let Some(val) = get(PROXY_VAR) {
            config.proxy = val;
        }
        if let Some(val) = get(IGNORES_VAR) {
            config.ignores = split_list(&val);
        }
        if let Some(val) = get(TIMEOUT_VAR) {
            config.timeout = masked(parse_timeout(&val), !flags.timeout.is_zero())?;
        }

        if !config.is_empty() {
            tracing::debug!("Loaded configuration overrides from {}_* environment", ENV_PREFIX);
        }
        Ok(config)
    }
}

/// Drop a parse failure for a field the flags already decide.
fn masked<T: Default>(parsed: ConfigResult<T>, overridden: bool) -> ConfigResult<T> {
    match parsed {
        Err(err) if overridden => {
            tracing::warn!("Ignoring {} (overridden by flag)", err);
            Ok(T::default())
        }
        other => other,
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(LIST_SEPARATOR)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_timeout(value: &str) -> ConfigResult<Duration> {
    humantime::parse_duration(value.trim())
        .map_err(|err| ConfigError::env_parse(TIMEOUT_VAR, format!("invalid duration '{value}': {err}")))
}

fn parse_count(var: &str, value: &str) -> ConfigResult<u32> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::env_parse(var, format!("expected a non-negative integer, got '{value}'")))
}
