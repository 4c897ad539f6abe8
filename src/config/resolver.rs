//! Resolution of the effective configuration from its sources.

use super::error::ConfigResult;
use super::schema::Configuration;

/// The process-level configuration sources.
///
/// Built once at process entry and never mutated afterwards; every resolution
/// reads them through a shared reference.
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    defaults: Configuration,
    environment: Configuration,
    flags: Configuration,
}

impl ConfigSources {
    pub fn new(defaults: Configuration, environment: Configuration, flags: Configuration) -> Self {
        Self {
            defaults,
            environment,
            flags,
        }
    }

    /// Sources for this process: built-in defaults for the working directory,
    /// `THEMEKIT_*` variables and the given flags.
    ///
    /// An unparsable variable only fails when no flag overrides its field.
    pub fn from_process(flags: Configuration) -> ConfigResult<Self> {
        let environment = Configuration::from_env_under(|name| std::env::var(name).ok(), &flags)?;
        Ok(Self::new(Configuration::defaults(), environment, flags))
    }

    pub fn defaults(&self) -> &Configuration {
        &self.defaults
    }

    pub fn environment(&self) -> &Configuration {
        &self.environment
    }

    pub fn flags(&self) -> &Configuration {
        &self.flags
    }

    /// Merge flags > environment > `file` > defaults without validating.
    pub fn merge(&self, file: &Configuration) -> Configuration {
        let mut config = Configuration::default();
        config.overlay(&self.flags);
        config.overlay(&self.environment);
        config.overlay(file);
        config.overlay(&self.defaults);
        config
    }

    /// Merge the sources with `file` and validate the result.
    pub fn resolve(&self, file: &Configuration) -> ConfigResult<Configuration> {
        let config = self.merge(file);
        config.validate()?;
        tracing::debug!(domain = %config.domain, theme_id = %config.theme_id, "Resolved configuration");
        Ok(config)
    }
}
