//! Response decoding (RawResponse -> typed values)
//!
//! Two modes: one JSON document per response, or an NDJSON stream decoded
//! line by line. Status classification happens before either and never
//! looks inside the error body.

use crate::transport::{BodyStream, RawResponse};
use crate::{Error, Result};
use bytes::Bytes;
use futures::StreamExt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::trace;

/// Any status from 300 up is a failure (list, get, upsert, batch upsert).
pub const REDIRECT_IS_FAILURE: u16 = 300;

/// Only 400 and up is a failure (create). 3xx on create is passed through.
pub const CLIENT_ERROR_IS_FAILURE: u16 = 400;

/// Pass the response through if `status < failure_from`, otherwise turn it
/// into [`Error::Status`] carrying the raw body text verbatim.
pub async fn ensure_status(response: RawResponse, failure_from: u16) -> Result<RawResponse> {
    if response.status < failure_from {
        return Ok(response);
    }

    let code = response.status;
    let status = response.status_text.clone();
    let message = read_error_body(response.into_body()).await;
    Err(Error::status(code, status, message))
}

// The status is the error being reported; a body that fails halfway still
// contributes whatever arrived before the failure.
async fn read_error_body(mut body: BodyStream) -> String {
    let mut buf = Vec::new();
    while let Some(chunk) = body.next().await {
        match chunk {
            Ok(bytes) => buf.extend_from_slice(&bytes),
            Err(_) => break,
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Decode exactly one JSON document from the body. Anything after the first
/// document is ignored.
pub async fn decode_json<T: DeserializeOwned>(response: RawResponse) -> Result<T> {
    let bytes = response.bytes().await?;
    let mut documents = serde_json::Deserializer::from_slice(&bytes).into_iter::<T>();
    match documents.next() {
        Some(Ok(value)) => Ok(value),
        Some(Err(e)) => Err(Error::decode(e.to_string())),
        None => Err(Error::decode("empty response body")),
    }
}

/// Decode an NDJSON body into one value per line, in arrival order.
///
/// All or nothing: the first undecodable line (or body read failure) is
/// returned as the error and nothing decoded so far escapes. Every line
/// must hold a document, so a blank line inside the body is an error too.
/// `\r\n` endings and a missing final newline are accepted.
pub async fn decode_ndjson<T: DeserializeOwned>(response: RawResponse) -> Result<Vec<T>> {
    let mut body = response.into_body();
    let mut decoded: Vec<T> = Vec::new();
    let mut buf: Vec<u8> = Vec::new();
    let mut line_no = 0usize;

    while let Some(chunk) = body.next().await {
        buf.extend_from_slice(&chunk?);
        while let Some(idx) = buf.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = buf.drain(..=idx).collect();
            line_no += 1;
            decoded.push(decode_line(&line, line_no)?);
        }
    }

    // Final line without a trailing newline.
    if !buf.is_empty() {
        line_no += 1;
        decoded.push(decode_line(&buf, line_no)?);
    }

    trace!(lines = decoded.len(), "decoded ndjson response");
    Ok(decoded)
}

fn decode_line<T: DeserializeOwned>(raw: &[u8], line_no: usize) -> Result<T> {
    let line = raw.trim_ascii();
    if line.is_empty() {
        return Err(Error::decode(format!("line {}: empty line", line_no)));
    }
    serde_json::from_slice(line).map_err(|e| Error::decode(format!("line {}: {}", line_no, e)))
}

/// Serialize items one JSON document per line, each `\n`-terminated.
pub fn encode_ndjson<T: Serialize>(items: &[T]) -> Result<Bytes> {
    let mut body = Vec::new();
    for item in items {
        serde_json::to_writer(&mut body, item)?;
        body.push(b'\n');
    }
    Ok(Bytes::from(body))
}
