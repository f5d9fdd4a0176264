use crate::client::core::AkeneoClient;
use crate::config::ClientConfigBuilder;
use crate::transport::Transport;
use crate::Result;
use std::sync::Arc;
use std::time::Duration;

/// Builder for [`AkeneoClient`].
///
/// Either configure the default HTTP transport (unset values fall back to
/// `AKENEO_*` env vars) or inject a transport of your own.
#[derive(Default)]
pub struct AkeneoClientBuilder {
    config: ClientConfigBuilder,
    transport: Option<Arc<dyn Transport>>,
}

impl AkeneoClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config = self.config.base_url(url);
        self
    }

    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.config = self.config.access_token(token);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.timeout(timeout);
        self
    }

    pub fn proxy_url(mut self, url: impl Into<String>) -> Self {
        self.config = self.config.proxy_url(url);
        self
    }

    /// Use a custom transport. HTTP settings on this builder are then ignored.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<AkeneoClient> {
        match self.transport {
            Some(transport) => Ok(AkeneoClient::with_transport(transport)),
            None => AkeneoClient::new(&self.config.build()?),
        }
    }
}
