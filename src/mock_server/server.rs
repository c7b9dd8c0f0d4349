//! Mock Greip API server.
//!
//! Provides an axum-based HTTP server that simulates the Greip API.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::fixtures::{DefaultScenario, Fixtures};
use super::handlers;
use super::state::{MockState, RecordedRequest};

/// A mock Greip API server for testing.
///
/// The server runs in the background and can be used to test the Greip client
/// against a realistic API implementation.
pub struct MockServer {
    /// The URL where the server is listening.
    url: String,
    /// Handle to the server task.
    handle: JoinHandle<()>,
    /// Shared state that can be modified during tests.
    state: Arc<RwLock<MockState>>,
}

impl MockServer {
    /// Start a new mock server with default fixtures.
    ///
    /// The server listens on a random available port and returns immediately.
    /// Use `url()` to get the server's base URL.
    pub async fn start() -> Self {
        Self::with_state(Self::default_state()).await
    }

    /// Start a mock server with empty state.
    ///
    /// Useful when you want to control exactly what data is available.
    pub async fn start_empty() -> Self {
        Self::with_state(MockState::new()).await
    }

    /// Start a mock server with custom state.
    pub async fn with_state(state: MockState) -> Self {
        let shared_state = state.shared();
        let app = Self::create_router(shared_state.clone());

        // Bind to a random available port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self {
            url: format!("http://{}", addr),
            handle,
            state: shared_state,
        }
    }

    /// Get the base URL of the mock server.
    ///
    /// Use this URL with `GreipClient::with_base_url` for testing.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get access to the server's shared state.
    ///
    /// This allows modifying the mock data during a test.
    pub fn state(&self) -> Arc<RwLock<MockState>> {
        self.state.clone()
    }

    /// Snapshot of every request received so far.
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.state.read().await.requests.clone()
    }

    /// Shutdown the server.
    ///
    /// This aborts the server task. It's safe to call multiple times.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }

    /// Create the default state with common test fixtures.
    fn default_state() -> MockState {
        let scenario = Fixtures::default_scenario();
        Self::state_from_scenario(scenario)
    }

    /// Create state from a scenario.
    fn state_from_scenario(scenario: DefaultScenario) -> MockState {
        let mut state = MockState::new();

        for lookup in scenario.lookups {
            state = state.with_lookup(lookup);
        }

        for country in scenario.countries {
            state = state.with_country(country);
        }

        for asn in scenario.asns {
            state = state.with_asn(asn);
        }

        for word in scenario.bad_words {
            state = state.with_bad_word(&word);
        }

        state
    }

    /// Create the axum router with all routes.
    pub(crate) fn create_router(state: Arc<RwLock<MockState>>) -> Router {
        Router::new()
            // IP routes
            .route("/IPLookup", get(handlers::ip_lookup))
            .route("/BulkLookup", get(handlers::bulk_lookup))
            .route("/threats", get(handlers::threats))
            .route("/ASNLookup", get(handlers::asn_lookup))
            // Country routes
            .route("/Country", get(handlers::country))
            // Text and validation routes
            .route("/badWords", get(handlers::bad_words))
            .route("/validateEmail", get(handlers::validate_email))
            .route("/validatePhone", get(handlers::validate_phone))
            .route("/validateIBAN", get(handlers::validate_iban))
            // Fraud routes
            .route("/paymentFraud", post(handlers::payment_fraud))
            // Health check
            .route("/health", get(health_check))
            .with_state(state)
    }
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GreipClient;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn client_for(server: &MockServer) -> GreipClient {
        GreipClient::new("test-token")
            .unwrap()
            .with_base_url(server.url())
            .unwrap()
    }

    #[tokio::test]
    async fn test_server_starts_and_responds() {
        let server = MockServer::start().await;

        // Server should be accessible
        let client = reqwest::Client::new();
        let response = client
            .get(format!("{}/health", server.url()))
            .send()
            .await
            .expect("Failed to send request");

        assert!(response.status().is_success());
        assert_eq!(response.text().await.unwrap(), "ok");

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_router_answers_with_envelope() {
        let app = MockServer::create_router(MockServer::default_state().shared());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/ASNLookup?asn=AS13335")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let envelope: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(envelope["status"], "success");
        assert_eq!(envelope["data"]["asn"], "AS13335");
    }

    #[tokio::test]
    async fn test_lookup_with_greip_client() {
        let server = MockServer::start().await;
        let client = client_for(&server);

        let lookup = client
            .ip_lookup("1.1.1.1", &[], None)
            .await
            .expect("Failed to look up IP");

        assert_eq!(lookup.country_code, "AU");
        assert!(lookup.security.is_none());

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_empty_server_still_geolocates_valid_ips() {
        let server = MockServer::start_empty().await;
        let client = client_for(&server);

        let lookup = client.ip_lookup("9.9.9.9", &[], None).await.unwrap();
        assert_eq!(lookup.ip_type, "IPv4");
        assert!(client.asn_lookup("AS13335").await.is_err());

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_custom_state() {
        let state = MockState::new().with_country(Fixtures::country(
            "JP",
            "Japan",
            "Tokyo",
            "JPY",
        ));

        let server = MockServer::with_state(state).await;
        let client = client_for(&server);

        let country = client
            .country("jp", &["currency"], None)
            .await
            .expect("Failed to get country");

        assert_eq!(country.capital, "Tokyo");
        assert_eq!(country.currency.unwrap().code, "JPY");

        server.shutdown().await;
    }
}
