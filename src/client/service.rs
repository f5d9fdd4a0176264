//! Generic request dispatch shared by all resource endpoints.
//!
//! Every operation is one stateless round trip:
//! headers -> transport -> status check -> decode. Nothing is retried and
//! every failure goes straight back to the caller.

use crate::decode::{
    decode_json, decode_ndjson, encode_ndjson, ensure_status, CLIENT_ERROR_IS_FAILURE,
    REDIRECT_IS_FAILURE,
};
use crate::query::{build_query, QueryParams, RequestOpts, LIST_OPTIONS};
use crate::transport::{Headers, Method, RawResponse, Transport};
use crate::types::{BatchResultLine, ListResponse};
use crate::{Error, ErrorContext, Result};
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use urlencoding::encode;

/// CRUD and batch operations against one resource collection (e.g. `families`).
#[derive(Clone, Copy)]
pub struct ApiService<'a> {
    transport: &'a dyn Transport,
    resource: &'static str,
}

impl<'a> ApiService<'a> {
    pub fn new(transport: &'a dyn Transport, resource: &'static str) -> Self {
        Self {
            transport,
            resource,
        }
    }

    /// `GET {resource}` with the recognized list options as query.
    pub async fn list<T: DeserializeOwned>(&self, opts: &RequestOpts) -> Result<ListResponse<T>> {
        let query = build_query(opts, LIST_OPTIONS);
        let headers = self.transport.headers_for_request();
        let response = self
            .dispatch(Method::Get, self.resource, headers, None, Some(&query))
            .await?;
        let response = ensure_status(response, REDIRECT_IS_FAILURE).await?;
        decode_json(response).await
    }

    /// `GET {resource}/{code}`.
    pub async fn get<T: DeserializeOwned>(&self, code: &str) -> Result<T> {
        let path = self.item_path(code)?;
        let headers = self.transport.headers_for_request();
        let response = self.dispatch(Method::Get, &path, headers, None, None).await?;
        let response = ensure_status(response, REDIRECT_IS_FAILURE).await?;
        decode_json(response).await
    }

    /// `POST {resource}` with one JSON document. 3xx is not a failure here.
    pub async fn create<B: Serialize>(&self, entity: &B) -> Result<()> {
        let body = Bytes::from(serde_json::to_vec(entity)?);
        let headers = self.transport.headers_for_request();
        let response = self
            .dispatch(Method::Post, self.resource, headers, Some(body), None)
            .await?;
        ensure_status(response, CLIENT_ERROR_IS_FAILURE).await?;
        Ok(())
    }

    /// `PATCH {resource}/{code}` with one JSON document (partial update or create).
    pub async fn upsert<B: Serialize>(&self, code: &str, entity: &B) -> Result<()> {
        let path = self.item_path(code)?;
        let body = Bytes::from(serde_json::to_vec(entity)?);
        let headers = self.transport.headers_for_request();
        let response = self
            .dispatch(Method::Patch, &path, headers, Some(body), None)
            .await?;
        ensure_status(response, REDIRECT_IS_FAILURE).await?;
        Ok(())
    }

    /// `PATCH {resource}` with an NDJSON body, one entity per line.
    ///
    /// Returns one line per submitted entity, in submission order. Entities
    /// the server rejected show up as failed lines, not as an `Err`.
    pub async fn batch_upsert<B: Serialize>(&self, entities: &[B]) -> Result<Vec<BatchResultLine>> {
        let body = encode_ndjson(entities)?;
        let headers = self.transport.headers_for_batch_request();
        let response = self
            .dispatch(Method::Patch, self.resource, headers, Some(body), None)
            .await?;
        let response = ensure_status(response, REDIRECT_IS_FAILURE).await?;
        let lines: Vec<BatchResultLine> = decode_ndjson(response).await?;

        debug!(
            resource = self.resource,
            submitted = entities.len(),
            returned = lines.len(),
            failed = lines.iter().filter(|l| !l.is_success()).count(),
            "batch upsert completed"
        );
        Ok(lines)
    }

    // The code is one path segment: `?`, `#` and `/` are escaped so it can
    // never address a query, a fragment or another resource.
    fn item_path(&self, code: &str) -> Result<String> {
        let invalid = |message: &str| {
            Error::validation_with_context(
                message,
                ErrorContext::new()
                    .with_field_path("code")
                    .with_details(code)
                    .with_source(self.resource),
            )
        };
        if code.trim().is_empty() {
            return Err(invalid("resource code must not be empty"));
        }
        if code == "." || code == ".." {
            return Err(invalid("resource code must not be a dot segment"));
        }
        Ok(format!("{}/{}", self.resource, encode(code)))
    }

    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        headers: Headers,
        body: Option<Bytes>,
        query: Option<&QueryParams>,
    ) -> Result<RawResponse> {
        debug!(method = method.as_str(), path, "dispatching request");
        Ok(self
            .transport
            .do_request(method, path, headers, body, query)
            .await?)
    }
}
