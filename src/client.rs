//! Client entry point and endpoint services.
//!
//! [`AkeneoClient`] owns the transport; endpoint services such as
//! [`FamilyApi`] borrow it for the duration of each call. The request
//! machinery every resource shares lives in [`ApiService`].

pub mod builder;
pub mod core;
pub mod family;
pub mod service;

pub use builder::AkeneoClientBuilder;
pub use self::core::AkeneoClient;
pub use family::FamilyApi;
pub use service::ApiService;
