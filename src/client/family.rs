//! Product family endpoint.

use crate::client::service::ApiService;
use crate::query::RequestOpts;
use crate::transport::Transport;
use crate::types::{BatchResultLine, FamiliesResponse, Family};
use crate::Result;

const RESOURCE: &str = "families";

/// The five family operations. Borrowed from [`crate::AkeneoClient::families`].
#[derive(Clone, Copy)]
pub struct FamilyApi<'a> {
    service: ApiService<'a>,
}

impl<'a> FamilyApi<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self {
            service: ApiService::new(transport, RESOURCE),
        }
    }

    /// One page of families. Recognized options: `page`, `limit`, `withCount`
    /// (string values only; see [`crate::query::ListOptions`]).
    pub async fn get_all(&self, opts: &RequestOpts) -> Result<FamiliesResponse> {
        self.service.list(opts).await
    }

    pub async fn get(&self, code: &str) -> Result<Family> {
        self.service.get(code).await
    }

    pub async fn create(&self, family: &Family) -> Result<()> {
        self.service.create(family).await
    }

    /// Create or partially update the family addressed by `family.code`.
    pub async fn upsert(&self, family: &Family) -> Result<()> {
        self.service.upsert(&family.code, family).await
    }

    /// Create or update many families in one request.
    pub async fn batch_upsert(&self, families: &[Family]) -> Result<Vec<BatchResultLine>> {
        self.service.batch_upsert(families).await
    }
}
