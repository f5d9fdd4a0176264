//! Mock HTTP server setup for integration tests

use akeneo_client::AkeneoClient;
use mockito::{Matcher, Mock, Server, ServerGuard};

pub const TOKEN: &str = "test-token";
pub const API_ROOT: &str = "/api/rest/v1";

/// Test fixture that owns a mock PIM
pub struct MockServerFixture {
    pub server: ServerGuard,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        Self {
            server: Server::new_async().await,
        }
    }

    pub fn base_url(&self) -> String {
        format!("{}{}", self.server.url(), API_ROOT)
    }

    /// Client pointed at the mock server through the default HTTP transport
    pub fn client(&self) -> AkeneoClient {
        AkeneoClient::builder()
            .base_url(self.base_url())
            .access_token(TOKEN)
            .build()
            .expect("client should build")
    }

    /// Mock for a single-document call, requiring the JSON header set
    pub async fn mock_json(&mut self, method: &str, path: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock(method, format!("{}{}", API_ROOT, path).as_str())
            .match_header("authorization", format!("Bearer {}", TOKEN).as_str())
            .match_header("content-type", "application/json")
            .match_header("x-request-id", Matcher::Any)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Mock for the NDJSON batch call, requiring the collection header set and exact body
    pub async fn mock_batch(&mut self, path: &str, expected_body: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock("PATCH", format!("{}{}", API_ROOT, path).as_str())
            .match_header("authorization", format!("Bearer {}", TOKEN).as_str())
            .match_header("content-type", "application/vnd.akeneo.collection+json")
            .match_body(Matcher::Exact(expected_body.to_string()))
            .with_status(status)
            .with_header("content-type", "application/vnd.akeneo.collection+json")
            .with_body(body)
            .create_async()
            .await
    }
}
