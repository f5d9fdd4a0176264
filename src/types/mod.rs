//! Wire types for the PIM REST API.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Family`] | Product family: attributes, per-channel requirements, labels |
//! | [`FamilyItem`] | A family as listed, with its `_links` |
//! | [`ListResponse`] | Paginated list envelope (`_links`, `current_page`, `_embedded.items`) |
//! | [`BatchResultLine`] | One line of an NDJSON batch response |
//!
//! ## Example
//!
//! ```rust
//! use akeneo_client::types::Family;
//!
//! let family = Family::new("shoes", "sku")
//!     .with_attributes(["sku", "name", "size"])
//!     .with_requirement("ecommerce", ["sku", "name"])
//!     .with_label("en_US", "Shoes");
//!
//! let json = serde_json::to_value(&family).unwrap();
//! assert_eq!(json["labels"]["en_US"], "Shoes");
//! assert!(json.get("attribute_as_image").is_none());
//! ```

pub mod batch;
pub mod family;
pub mod response;

pub use batch::{BatchResultLine, LineError};
pub use family::{FamiliesResponse, Family, FamilyItem};
pub use response::{Embedded, Link, ListResponse, Pagination, ResponseLinks};
