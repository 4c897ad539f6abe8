//! Validation rules for a resolved configuration.

use super::error::{ConfigError, ConfigResult};
use super::schema::Configuration;

/// Domain suffixes accepted for a storefront.
pub const DOMAIN_SUFFIXES: [&str; 2] = ["myshopify.com", "myshopify.io"];

impl Configuration {
    /// Check every rule and report all violations at once.
    pub fn validate(&self) -> ConfigResult<()> {
        let mut violations = Vec::new();

        if self.theme_id.is_empty() {
            violations.push("missing theme_id".to_string());
        } else if !self.is_live() && self.theme_id.parse::<i64>().is_err() {
            violations.push("invalid theme_id".to_string());
        }

        if self.domain.is_empty() {
            violations.push("missing domain".to_string());
        } else if !DOMAIN_SUFFIXES
            .iter()
            .any(|suffix| self.domain.ends_with(suffix))
        {
            violations.push("invalid domain, must end in '.myshopify.com'".to_string());
        }

        if self.password.is_empty() {
            violations.push("missing password".to_string());
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(violations))
        }
    }
}
