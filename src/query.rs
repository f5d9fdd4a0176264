//! Query-parameter filtering.
//!
//! Callers pass loosely-typed options; only whitelisted keys holding string
//! values reach the URL. Anything else is dropped without an error, so
//! validating options stays the caller's job.

use serde_json::Value;
use std::collections::HashMap;

/// Caller-supplied request options, keyed by API parameter name.
pub type RequestOpts = HashMap<String, Value>;

/// Ordered `key=value` pairs appended to the request URL.
pub type QueryParams = Vec<(String, String)>;

/// Options recognized by list endpoints, in emission order.
pub const LIST_OPTIONS: &[&str] = &["page", "limit", "withCount"];

/// Keep `recognized` keys whose value is a JSON string, in `recognized` order.
pub fn build_query(opts: &RequestOpts, recognized: &[&str]) -> QueryParams {
    recognized
        .iter()
        .filter_map(|key| match opts.get(*key) {
            Some(Value::String(value)) => Some((key.to_string(), value.clone())),
            _ => None,
        })
        .collect()
}

/// Typed convenience for the list options. Converts into [`RequestOpts`]
/// with every value rendered as a string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub with_count: Option<bool>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_count(mut self, with_count: bool) -> Self {
        self.with_count = Some(with_count);
        self
    }
}

impl From<ListOptions> for RequestOpts {
    fn from(options: ListOptions) -> Self {
        let mut opts = RequestOpts::new();
        if let Some(page) = options.page {
            opts.insert("page".to_string(), Value::String(page.to_string()));
        }
        if let Some(limit) = options.limit {
            opts.insert("limit".to_string(), Value::String(limit.to_string()));
        }
        if let Some(with_count) = options.with_count {
            opts.insert("withCount".to_string(), Value::String(with_count.to_string()));
        }
        opts
    }
}
