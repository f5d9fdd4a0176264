use crate::client::builder::AkeneoClientBuilder;
use crate::client::family::FamilyApi;
use crate::config::ClientConfig;
use crate::transport::{HttpTransport, Transport};
use crate::Result;
use std::sync::Arc;

/// Stateless PIM client. Cheap to clone; clones share the transport.
///
/// Safe to use from many tasks at once as long as the transport is, which
/// the `Send + Sync` bound on [`Transport`] requires.
#[derive(Clone)]
pub struct AkeneoClient {
    transport: Arc<dyn Transport>,
}

impl AkeneoClient {
    /// Client over the default reqwest transport.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self::with_transport(Arc::new(HttpTransport::new(config)?)))
    }

    /// Client configured from `AKENEO_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(&ClientConfig::from_env()?)
    }

    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub fn builder() -> AkeneoClientBuilder {
        AkeneoClientBuilder::new()
    }

    /// Product families endpoint.
    pub fn families(&self) -> FamilyApi<'_> {
        FamilyApi::new(self.transport.as_ref())
    }
}

impl std::fmt::Debug for AkeneoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AkeneoClient").finish_non_exhaustive()
    }
}
