//! Common test infrastructure
//!
//! Tests should only import from this module, not from internal submodules.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{TestServer, TestClient, EXAMPLE_ISRC};
//! use reqwest::StatusCode;
//!
//! #[tokio::test]
//! async fn test_get_single() {
//!     let server = TestServer::spawn().await;
//!     let client = TestClient::new(server.base_url.clone());
//!
//!     let response = client.get_single(EXAMPLE_ISRC).await;
//!     assert_eq!(response.status(), StatusCode::NOT_FOUND);
//! }
//! ```

mod client;
mod constants;
mod server;

pub use client::{example_single_json, TestClient};
pub use constants::*;
pub use server::{TestServer, FRONTEND_INDEX_HTML, FRONTEND_SCRIPT_JS};
