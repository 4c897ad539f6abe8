//! Configuration schema definitions.
//!
//! `Configuration` is the one record every source produces: flags, the
//! environment, the config file and the built-in defaults. A field holding its
//! zero value (empty string, empty list, `0`, `Duration::ZERO`) counts as unset
//! and is filled in from a lower-precedence source during resolution.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default maximum amount of requests in the token bucket.
pub const DEFAULT_BUCKET_SIZE: u32 = 40;
/// Default number of tokens returned to the bucket per refill.
pub const DEFAULT_REFILL_RATE: u32 = 2;
/// Default number of workers spawned for any job.
pub const DEFAULT_CONCURRENCY: u32 = 2;
/// Default timeout for a stalled operation.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for one storefront environment.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// API access credential
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
    /// Theme identifier, or "live" for the published theme
    #[serde(skip_serializing_if = "String::is_empty")]
    pub theme_id: String,
    /// Storefront hostname
    #[serde(rename = "store")]
    pub domain: String,
    /// Local working directory; never persisted
    #[serde(skip)]
    pub directory: PathBuf,
    /// Filenames excluded from sync
    #[serde(rename = "ignore_files", skip_serializing_if = "Vec::is_empty")]
    pub ignored_files: Vec<String>,
    /// Token-bucket capacity
    pub bucket_size: u32,
    /// Token-bucket refill rate
    pub refill_rate: u32,
    /// Worker pool size
    #[serde(skip_serializing_if = "is_zero")]
    pub concurrency: u32,
    /// Outbound proxy URL
    #[serde(skip_serializing_if = "String::is_empty")]
    pub proxy: String,
    /// Glob-style ignore patterns
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignores: Vec<String>,
    /// Per-operation timeout
    #[serde(with = "humantime_serde", skip_serializing_if = "Duration::is_zero")]
    pub timeout: Duration,
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

impl Configuration {
    /// Built-in defaults rooted at `directory`.
    pub fn defaults_for(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            bucket_size: DEFAULT_BUCKET_SIZE,
            refill_rate: DEFAULT_REFILL_RATE,
            concurrency: DEFAULT_CONCURRENCY,
            timeout: DEFAULT_TIMEOUT,
            ..Self::default()
        }
    }

    /// Built-in defaults rooted at the process working directory.
    ///
    /// An unreadable working directory leaves `directory` unset.
    pub fn defaults() -> Self {
        let directory = std::env::current_dir().unwrap_or_else(|err| {
            tracing::warn!("Could not determine working directory: {}", err);
            PathBuf::new()
        });
        Self::defaults_for(directory)
    }

    /// Working directory as a path.
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("password", &super::api::redact(&self.password))
            .field("theme_id", &self.theme_id)
            .field("domain", &self.domain)
            .field("directory", &self.directory)
            .field("ignored_files", &self.ignored_files)
            .field("bucket_size", &self.bucket_size)
            .field("refill_rate", &self.refill_rate)
            .field("concurrency", &self.concurrency)
            .field("proxy", &self.proxy)
            .field("ignores", &self.ignores)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unset() {
        let config = Configuration::default();
        assert!(config.password.is_empty());
        assert!(config.directory.as_os_str().is_empty());
        assert_eq!(config.bucket_size, 0);
        assert!(config.timeout.is_zero());
    }

    #[test]
    fn test_builtin_defaults() {
        let config = Configuration::defaults_for("/work/theme");
        assert_eq!(config.directory(), Path::new("/work/theme"));
        assert_eq!(config.bucket_size, 40);
        assert_eq!(config.refill_rate, 2);
        assert_eq!(config.concurrency, 2);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.domain.is_empty());
    }

    #[test]
    fn test_config_serialization_omits_unset_optionals() {
        let config = Configuration {
            domain: "shop.myshopify.com".to_string(),
            directory: PathBuf::from("/never/written"),
            ..Configuration::default()
        };
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("store = \"shop.myshopify.com\""));
        assert!(toml_str.contains("bucket_size = 0"));
        assert!(toml_str.contains("refill_rate = 0"));
        for key in ["password", "theme_id", "ignore_files", "concurrency", "proxy", "ignores", "timeout", "directory"] {
            assert!(!toml_str.contains(key), "{key} should be omitted:\n{toml_str}");
        }
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
            password = "secret"
            theme_id = "123"
            store = "shop.myshopify.com"
            directory = "/ignored"
            ignore_files = ["config/settings_data.json"]
            timeout = "1m"
        "#;

        let config: Configuration = toml::from_str(toml_str).unwrap();
        assert_eq!(config.password, "secret");
        assert_eq!(config.domain, "shop.myshopify.com");
        assert_eq!(config.ignored_files, vec!["config/settings_data.json"]);
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert!(config.directory.as_os_str().is_empty());
        // Missing keys stay unset
        assert_eq!(config.bucket_size, 0);
        assert!(config.ignores.is_empty());
    }

    #[test]
    fn test_debug_hides_password() {
        let config = Configuration {
            password: "shppa_topsecret".to_string(),
            ..Configuration::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("topsecret"));
    }
}
