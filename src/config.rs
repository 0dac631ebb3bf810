//! Client configuration
//!
//! Settings can come from defaults, a YAML file, and the environment, in
//! that order of precedence (environment wins).
//!
//! ```yaml
//! api_url: https://api.equinix.com/metal/v1/
//! auth_token: "..."
//! timeout_seconds: 30
//! max_retries: 3
//! rate_limit:
//!   requests_per_second: 10
//!   burst_size: 10
//! ```

use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, RateLimiterConfig, AUTH_TOKEN_HEADER};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default API endpoint
pub const DEFAULT_API_URL: &str = "https://api.equinix.com/metal/v1/";

/// Environment variable holding the API token
pub const ENV_AUTH_TOKEN: &str = "METAL_AUTH_TOKEN";

/// Environment variable overriding the API endpoint
pub const ENV_API_URL: &str = "METAL_API_URL";

/// Settings for a [`Client`](crate::Client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API base URL
    pub api_url: String,

    /// API token sent as `X-Auth-Token`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// Transport retries for throttled or failed requests
    pub max_retries: u32,

    /// Client-side rate limit; `None` disables it
    pub rate_limit: Option<RateLimiterConfig>,

    /// Overrides the default user agent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            auth_token: None,
            timeout_seconds: 30,
            max_retries: 3,
            rate_limit: Some(RateLimiterConfig::default()),
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by the process environment
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Parse a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Apply `METAL_AUTH_TOKEN` / `METAL_API_URL` from `lookup`
    #[must_use]
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup(ENV_AUTH_TOKEN).filter(|t| !t.is_empty()) {
            self.auth_token = Some(token);
        }
        if let Some(url) = lookup(ENV_API_URL).filter(|u| !u.is_empty()) {
            self.api_url = url;
        }
        self
    }

    /// Set the API token
    #[must_use]
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Set the API base URL
    #[must_use]
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Check that the configuration can build a client
    pub fn validate(&self) -> Result<()> {
        match self.auth_token.as_deref() {
            None | Some("") => return Err(Error::missing_field("auth_token")),
            Some(_) => {}
        }
        url::Url::parse(&self.api_url)?;
        if self.timeout_seconds == 0 {
            return Err(Error::config("timeout_seconds must be greater than zero"));
        }
        Ok(())
    }

    /// Transport settings derived from this configuration
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(&self.api_url)
            .timeout(Duration::from_secs(self.timeout_seconds))
            .max_retries(self.max_retries)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json");

        if let Some(token) = &self.auth_token {
            builder = builder.header(AUTH_TOKEN_HEADER, token);
        }
        builder = match &self.rate_limit {
            Some(limit) => builder.rate_limit(limit.clone()),
            None => builder.no_rate_limit(),
        };
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent);
        }

        builder.build()
    }
}
