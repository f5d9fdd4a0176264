//! Integration tests with mock HTTP server

pub mod batch;
pub mod families;
pub mod mock_server;
