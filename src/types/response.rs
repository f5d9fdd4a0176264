//! Paginated list envelope shared by every list endpoint.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
}

/// Navigation links. Opaque to the client: nothing here is ever followed
/// automatically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseLinks {
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<Link>,
}

impl ResponseLinks {
    pub fn self_href(&self) -> Option<&str> {
        self.self_link.as_ref().map(|l| l.href.as_str())
    }

    pub fn next_href(&self) -> Option<&str> {
        self.next.as_ref().map(|l| l.href.as_str())
    }
}

/// Pagination metadata at the top of a list page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(rename = "_links", default)]
    pub links: ResponseLinks,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_page: Option<u32>,
    /// Only present when the list was requested with `withCount=true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items_count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Embedded<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> Default for Embedded<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

/// One page of a list endpoint, items in server order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListResponse<T> {
    #[serde(flatten)]
    pub pagination: Pagination,
    #[serde(rename = "_embedded", default)]
    pub embedded: Embedded<T>,
}

impl<T> ListResponse<T> {
    pub fn items(&self) -> &[T] {
        &self.embedded.items
    }

    pub fn has_next(&self) -> bool {
        self.pagination.links.next.is_some()
    }
}
