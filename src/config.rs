//! Client configuration.
//!
//! Values set on the builder win; anything left unset falls back to the
//! environment, then to defaults:
//!
//! | Variable | Default |
//! |----------|---------|
//! | `AKENEO_BASE_URL` | required |
//! | `AKENEO_ACCESS_TOKEN` | required |
//! | `AKENEO_HTTP_TIMEOUT_SECS` | 30 |
//! | `AKENEO_HTTP_POOL_MAX_IDLE_PER_HOST` | 32 |
//! | `AKENEO_PROXY_URL` | none |
//!
//! Token acquisition is out of scope: the access token is taken as given.

use crate::{Error, ErrorContext, Result};
use std::env;
use std::time::Duration;
use url::Url;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_POOL_MAX_IDLE_PER_HOST: usize = 32;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root, always ending with `/` (e.g. `https://pim.example.com/api/rest/v1/`).
    pub base_url: Url,
    pub access_token: String,
    pub timeout: Duration,
    pub pool_max_idle_per_host: usize,
    pub proxy_url: Option<String>,
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Build a configuration purely from `AKENEO_*` environment variables.
    pub fn from_env() -> Result<Self> {
        ClientConfigBuilder::new().build()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<String>,
    access_token: Option<String>,
    timeout: Option<Duration>,
    pool_max_idle_per_host: Option<usize>,
    proxy_url: Option<String>,
}

impl ClientConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn pool_max_idle_per_host(mut self, n: usize) -> Self {
        self.pool_max_idle_per_host = Some(n);
        self
    }

    pub fn proxy_url(mut self, url: impl Into<String>) -> Self {
        self.proxy_url = Some(url.into());
        self
    }

    pub fn build(self) -> Result<ClientConfig> {
        let raw_base = self
            .base_url
            .or_else(|| env::var("AKENEO_BASE_URL").ok())
            .ok_or_else(|| {
                Error::configuration_with_context(
                    "Base URL required (AKENEO_BASE_URL)",
                    ErrorContext::new().with_field_path("base_url"),
                )
            })?;
        let base_url = normalize_base_url(&raw_base)?;

        let access_token = self
            .access_token
            .or_else(|| env::var("AKENEO_ACCESS_TOKEN").ok())
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                Error::configuration_with_context(
                    "Access token required (AKENEO_ACCESS_TOKEN)",
                    ErrorContext::new().with_field_path("access_token"),
                )
            })?;

        let timeout = self.timeout.unwrap_or_else(|| {
            Duration::from_secs(
                env::var("AKENEO_HTTP_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse::<u64>().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            )
        });

        let pool_max_idle_per_host = self.pool_max_idle_per_host.unwrap_or_else(|| {
            env::var("AKENEO_HTTP_POOL_MAX_IDLE_PER_HOST")
                .ok()
                .and_then(|s| s.parse::<usize>().ok())
                .unwrap_or(DEFAULT_POOL_MAX_IDLE_PER_HOST)
        });

        let proxy_url = self.proxy_url.or_else(|| env::var("AKENEO_PROXY_URL").ok());

        Ok(ClientConfig {
            base_url,
            access_token,
            timeout,
            pool_max_idle_per_host,
            proxy_url,
        })
    }
}

// Url::join drops the last segment unless the base ends with '/'.
fn normalize_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };
    Url::parse(&with_slash).map_err(|e| {
        Error::configuration_with_context(
            format!("Invalid base URL: {}", e),
            ErrorContext::new()
                .with_field_path("base_url")
                .with_details(trimmed.to_string()),
        )
    })
}
