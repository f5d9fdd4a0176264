//! Transport collaborator contract.
//!
//! The client never talks to the network directly: every call goes through a
//! [`Transport`], which supplies authentication headers and performs the HTTP
//! round trip. [`HttpTransport`] is the reqwest-backed default.

mod http;

pub use http::HttpTransport;

use crate::query::QueryParams;
use async_trait::async_trait;
use bytes::Bytes;
use futures::{Stream, TryStreamExt};
use std::collections::HashMap;
use std::fmt;
use std::pin::Pin;

/// Request headers as produced by the transport's header capabilities.
pub type Headers = HashMap<String, String>;

/// Response body, delivered as it arrives.
pub type BodyStream = Pin<Box<dyn Stream<Item = Result<Bytes, TransportError>> + Send + 'static>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Patch,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
        }
    }
}

/// A response as handed back by the transport, before any status check.
///
/// The body is only read by the decoder. Dropping the value releases the
/// underlying connection, so every exit path either consumes or drops it.
pub struct RawResponse {
    pub status: u16,
    /// Status line text, e.g. `"404 Not Found"`.
    pub status_text: String,
    body: BodyStream,
}

impl RawResponse {
    pub fn new(status: u16, status_text: impl Into<String>, body: BodyStream) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body,
        }
    }

    /// Build a response from an in-memory body. The status text is derived
    /// from the canonical reason phrase.
    pub fn from_bytes(status: u16, body: impl Into<Bytes>) -> Self {
        let body: Bytes = body.into();
        Self::new(
            status,
            status_line(status),
            Box::pin(futures::stream::once(async move { Ok(body) })),
        )
    }

    pub fn into_body(self) -> BodyStream {
        self.body
    }

    /// Read the whole body.
    pub async fn bytes(self) -> Result<Bytes, TransportError> {
        let chunks: Vec<Bytes> = self.body.try_collect().await?;
        Ok(chunks.concat().into())
    }
}

impl fmt::Debug for RawResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawResponse")
            .field("status", &self.status)
            .field("status_text", &self.status_text)
            .finish_non_exhaustive()
    }
}

/// `"<code> <reason>"`, falling back to the bare code for unknown statuses.
pub fn status_line(status: u16) -> String {
    match reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
    {
        Some(reason) => format!("{} {}", status, reason),
        None => status.to_string(),
    }
}

/// The collaborator every endpoint service dispatches through.
///
/// Single-document calls and NDJSON batch calls need different headers, so
/// the two header sets are separate capabilities rather than one
/// parameterised method.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Headers for calls carrying (or expecting) one JSON document.
    fn headers_for_request(&self) -> Headers;

    /// Headers for calls carrying an NDJSON collection body.
    fn headers_for_batch_request(&self) -> Headers;

    /// Perform one HTTP round trip. Non-2xx statuses are returned as data;
    /// only failures to obtain a response are errors.
    async fn do_request(
        &self,
        method: Method,
        path: &str,
        headers: Headers,
        body: Option<Bytes>,
        query: Option<&QueryParams>,
    ) -> Result<RawResponse, TransportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Transport error: {0}")]
    Other(String),
}
