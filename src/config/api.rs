//! Values derived from a resolved configuration: admin endpoints and the
//! headers every API request carries.

use super::error::{ConfigError, ConfigResult};
use super::schema::Configuration;
use reqwest::header::{HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use std::fmt;

/// Header carrying the API credential.
pub const ACCESS_TOKEN_HEADER: HeaderName = HeaderName::from_static("x-shopify-access-token");

/// Theme id sentinel for the published theme.
pub const LIVE_THEME: &str = "live";

const JSON: &str = "application/json";

/// Placeholder shown instead of a credential.
pub(crate) fn redact(secret: &str) -> &'static str {
    if secret.is_empty() {
        ""
    } else {
        "[REDACTED]"
    }
}

impl Configuration {
    /// True when the theme id refers to the published theme.
    pub fn is_live(&self) -> bool {
        self.theme_id.trim().eq_ignore_ascii_case(LIVE_THEME)
    }

    /// URL of the storefront admin, scoped to the theme unless it is live.
    ///
    /// An unparsable theme id is left off; validation rejects those first.
    pub fn admin_url(&self) -> String {
        let mut url = format!("https://{}/admin", self.domain);
        if !self.is_live() {
            if let Ok(theme_id) = self.theme_id.parse::<i64>() {
                url.push_str(&format!("/themes/{theme_id}"));
            }
        }
        url
    }

    /// Asset listing endpoint.
    pub fn asset_path(&self) -> String {
        format!("{}/assets.json", self.admin_url())
    }

    /// `themekit/<version> (<os>; <arch>)`
    pub fn user_agent(&self) -> String {
        format!(
            "themekit/{} ({}; {})",
            env!("CARGO_PKG_VERSION"),
            std::env::consts::OS,
            std::env::consts::ARCH
        )
    }

    /// Set the credential, JSON content negotiation and user agent headers.
    pub fn add_headers(&self, request: &mut reqwest::Request) -> ConfigResult<()> {
        let mut token = HeaderValue::from_str(&self.password)
            .map_err(|err| ConfigError::invalid_header(ACCESS_TOKEN_HEADER.as_str(), err))?;
        token.set_sensitive(true);
        let agent = HeaderValue::from_str(&self.user_agent())
            .map_err(|err| ConfigError::invalid_header(USER_AGENT.as_str(), err))?;

        let headers = request.headers_mut();
        headers.insert(ACCESS_TOKEN_HEADER, token);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON));
        headers.insert(ACCEPT, HeaderValue::from_static(JSON));
        headers.insert(USER_AGENT, agent);
        Ok(())
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<token:{} domain:{} bucket:{} refill:{} url:{}>",
            redact(&self.password),
            self.domain,
            self.bucket_size,
            self.refill_rate,
            self.admin_url()
        )
    }
}
