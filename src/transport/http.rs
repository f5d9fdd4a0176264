use super::{status_line, Headers, Method, RawResponse, Transport, TransportError};
use crate::config::ClientConfig;
use crate::query::QueryParams;
use crate::{Error, ErrorContext, Result};
use async_trait::async_trait;
use bytes::Bytes;
use futures::TryStreamExt;
use reqwest::Proxy;
use std::time::Instant;
use tracing::{debug, trace};
use url::Url;
use uuid::Uuid;

const JSON_CONTENT_TYPE: &str = "application/json";
const COLLECTION_CONTENT_TYPE: &str = "application/vnd.akeneo.collection+json";

/// reqwest-backed transport authenticating with a pre-acquired bearer token.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    access_token: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host);

        if let Some(proxy_url) = &config.proxy_url {
            let proxy = Proxy::all(proxy_url).map_err(|e| {
                Error::configuration_with_context(
                    "invalid proxy URL",
                    ErrorContext::new()
                        .with_field_path("proxy_url")
                        .with_details(e.to_string()),
                )
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            access_token: config.access_token.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> std::result::Result<Url, TransportError> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    fn base_headers(&self, content_type: &str) -> Headers {
        let mut headers = Headers::new();
        headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", self.access_token),
        );
        headers.insert("Content-Type".to_string(), content_type.to_string());
        headers.insert("Accept".to_string(), JSON_CONTENT_TYPE.to_string());
        headers
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn headers_for_request(&self) -> Headers {
        self.base_headers(JSON_CONTENT_TYPE)
    }

    fn headers_for_batch_request(&self) -> Headers {
        self.base_headers(COLLECTION_CONTENT_TYPE)
    }

    async fn do_request(
        &self,
        method: Method,
        path: &str,
        headers: Headers,
        body: Option<Bytes>,
        query: Option<&QueryParams>,
    ) -> std::result::Result<RawResponse, TransportError> {
        let url = self.endpoint(path)?;
        let request_id = Uuid::new_v4().to_string();

        let mut request = self.client.request(method.into(), url);
        for (name, value) in &headers {
            request = request.header(name.as_str(), value.as_str());
        }
        // Our own correlation id; the PIM ignores it but logs can link on it.
        request = request.header("x-request-id", request_id.as_str());

        if let Some(params) = query.filter(|p| !p.is_empty()) {
            request = request.query(params);
        }
        if let Some(body) = body {
            trace!(request_id = request_id.as_str(), bytes = body.len(), "akeneo request body");
            request = request.body(body);
        }

        let start = Instant::now();
        let response = request.send().await?;
        let status = response.status();

        debug!(
            method = method.as_str(),
            path,
            http_status = status.as_u16(),
            duration_ms = start.elapsed().as_millis() as u64,
            request_id = request_id.as_str(),
            "akeneo request completed"
        );

        let body = response.bytes_stream().map_err(TransportError::Http);
        Ok(RawResponse::new(
            status.as_u16(),
            status_line(status.as_u16()),
            Box::pin(body),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfigBuilder;

    fn transport(base_url: &str) -> HttpTransport {
        let config = ClientConfigBuilder::new()
            .base_url(base_url)
            .access_token("secret-token")
            .build()
            .unwrap();
        HttpTransport::new(&config).unwrap()
    }

    #[test]
    fn single_and_batch_headers_differ_only_in_content_type() {
        let t = transport("https://pim.example.com/api/rest/v1");
        let single = t.headers_for_request();
        let batch = t.headers_for_batch_request();

        assert_eq!(single["Authorization"], "Bearer secret-token");
        assert_eq!(batch["Authorization"], "Bearer secret-token");
        assert_eq!(single["Content-Type"], "application/json");
        assert_eq!(batch["Content-Type"], "application/vnd.akeneo.collection+json");
        assert_eq!(single["Accept"], batch["Accept"]);
    }

    #[test]
    fn endpoint_joins_relative_paths_under_base() {
        let t = transport("https://pim.example.com/api/rest/v1");
        assert_eq!(
            t.endpoint("families/shoes").unwrap().as_str(),
            "https://pim.example.com/api/rest/v1/families/shoes"
        );
        assert_eq!(
            t.endpoint("/families").unwrap().as_str(),
            "https://pim.example.com/api/rest/v1/families"
        );
    }

    #[test]
    fn endpoint_keeps_escaped_code_in_the_path() {
        let t = transport("https://pim.example.com/api/rest/v1");
        let url = t.endpoint("families/a%3Fb").unwrap();
        assert_eq!(url.path(), "/api/rest/v1/families/a%3Fb");
        assert_eq!(url.query(), None);

        let url = t.endpoint("families/..%2Fchannels").unwrap();
        assert_eq!(url.path(), "/api/rest/v1/families/..%2Fchannels");
    }

    #[test]
    fn invalid_proxy_url_is_a_configuration_error() {
        let config = ClientConfigBuilder::new()
            .base_url("https://pim.example.com/api/rest/v1")
            .access_token("secret-token")
            .proxy_url("http://[::1")
            .build()
            .unwrap();
        let err = HttpTransport::new(&config).err().unwrap();
        assert!(matches!(err, Error::Configuration { .. }));
        assert_eq!(
            err.context().and_then(|c| c.field_path.as_deref()),
            Some("proxy_url")
        );
    }
}
