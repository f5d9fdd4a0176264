//! # akeneo-client
//!
//! Typed async client for the Akeneo PIM REST API.
//!
//! ## Overview
//!
//! The crate is protocol plumbing between Rust types and the PIM's wire
//! format: authenticated HTTP dispatch, query-option filtering, single-resource
//! CRUD, and the NDJSON batch-upsert protocol with per-line results. It does
//! not acquire or refresh OAuth tokens; give it a valid access token or a
//! [`Transport`] of your own.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use akeneo_client::{AkeneoClient, Family, ListOptions, RequestOpts};
//!
//! #[tokio::main]
//! async fn main() -> akeneo_client::Result<()> {
//!     let client = AkeneoClient::builder()
//!         .base_url("https://pim.example.com/api/rest/v1")
//!         .access_token("token")
//!         .build()?;
//!
//!     let opts: RequestOpts = ListOptions::new().limit(50).into();
//!     let page = client.families().get_all(&opts).await?;
//!     for item in page.items() {
//!         println!("{}", item.family.code);
//!     }
//!
//!     let lines = client
//!         .families()
//!         .batch_upsert(&[Family::new("shoes", "name"), Family::new("caps", "name")])
//!         .await?;
//!     for line in lines.iter().filter(|l| !l.is_success()) {
//!         eprintln!("line {} failed: {:?}", line.line, line.message);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client entry point, generic dispatch, endpoint services |
//! | [`transport`] | Transport collaborator contract and reqwest implementation |
//! | [`query`] | Whitelist query-option filtering |
//! | [`decode`] | Status classification, JSON and NDJSON decoding |
//! | [`types`] | Wire types (families, list envelope, batch lines) |
//! | [`config`] | Client configuration with env fallbacks |

pub mod client;
pub mod config;
pub mod decode;
pub mod query;
pub mod transport;
pub mod types;

pub use client::{AkeneoClient, AkeneoClientBuilder, ApiService, FamilyApi};
pub use config::{ClientConfig, ClientConfigBuilder};
pub use query::{ListOptions, RequestOpts};
pub use transport::{HttpTransport, RawResponse, Transport};
pub use types::{BatchResultLine, FamiliesResponse, Family, FamilyItem};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
