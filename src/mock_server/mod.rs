//! Mock Greip API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the Greip API
//! for integration and end-to-end testing. Unlike wiremock which mocks at the
//! HTTP level per-test, this server answers every endpoint from shared
//! fixtures and records each request, so tests can assert on what the client
//! actually sent (authorization, test mode, payload).
//!
//! # Example
//!
//! ```ignore
//! use greip::mock_server::MockServer;
//! use greip::GreipClient;
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = GreipClient::new("test-token")
//!         .unwrap()
//!         .with_base_url(server.url())
//!         .unwrap();
//!
//!     // Server comes with default fixtures
//!     let asn = client.asn_lookup("AS13335").await.unwrap();
//!     assert_eq!(asn.organization, "Cloudflare, Inc.");
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{DefaultScenario, Fixtures};
pub use handlers::{iban_checksum_valid, score_payment};
pub use server::MockServer;
pub use state::{MockState, RecordedRequest};
