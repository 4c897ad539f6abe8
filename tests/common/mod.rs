//! Shared test utilities for configuration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::time::Duration;
use themekit::{ConfigSources, Configuration};

/// A configuration that passes validation.
pub fn valid_config() -> Configuration {
    Configuration {
        password: "shppa_test".to_string(),
        theme_id: "1234".to_string(),
        domain: "test-shop.myshopify.com".to_string(),
        ..Configuration::default()
    }
}

/// A configuration with every field set, tagged so values are traceable.
pub fn tagged_config(tag: &str, n: u32) -> Configuration {
    Configuration {
        password: format!("{tag}-password"),
        theme_id: n.to_string(),
        domain: format!("{tag}.myshopify.com"),
        directory: PathBuf::from(format!("/{tag}")),
        ignored_files: vec![format!("{tag}.json")],
        bucket_size: n,
        refill_rate: n,
        concurrency: n,
        proxy: format!("http://{tag}.proxy:3128"),
        ignores: vec![format!("{tag}/**")],
        timeout: Duration::from_secs(u64::from(n)),
    }
}

/// Sources with built-in defaults and nothing from flags or environment.
pub fn defaults_only(dir: &str) -> ConfigSources {
    ConfigSources::new(
        Configuration::defaults_for(dir),
        Configuration::default(),
        Configuration::default(),
    )
}

/// Sets `THEMEKIT_*` variables for one test and removes them on drop, even
/// when an assertion fails.
pub struct EnvVars(Vec<&'static str>);

impl EnvVars {
    pub fn set(vars: &[(&'static str, &str)]) -> Self {
        for (name, value) in vars {
            std::env::set_var(name, value);
        }
        Self(vars.iter().map(|(name, _)| *name).collect())
    }
}

impl Drop for EnvVars {
    fn drop(&mut self) {
        for name in &self.0 {
            std::env::remove_var(name);
        }
    }
}
