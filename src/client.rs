//! Greip API client.
//!
//! Low-level executor that handles authentication, test mode and envelope
//! decoding. The typed operations (`ip_lookup`, `threats`, ...) live in
//! the endpoint module and all go through [`GreipClient::get`] or
//! [`GreipClient::post`].

use std::env;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::envelope::decode_envelope;
use crate::error::{GreipError, Result};
use crate::payload::Payload;

const DEFAULT_API_URL: &str = "https://greipapi.com/";
const USER_AGENT: &str = concat!("greip/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Payload key and value marking a request as test mode.
const MODE_KEY: &str = "mode";
const MODE_TEST: &str = "test";

/// Greip API client.
///
/// Holds the API token, base URL and test-mode flag. Test mode is fixed at
/// construction and applied to every request: GET requests carry
/// `mode=test` in the query string, POST requests `"mode": "test"` in the
/// body.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool. It is read-only after construction, so a shared
/// reference can serve concurrent callers.
///
/// # Example
///
/// ```no_run
/// use greip::GreipClient;
///
/// # async fn example() -> greip::Result<()> {
/// // Create from environment variables
/// let client = GreipClient::from_env()?;
///
/// // Or configure manually
/// let client = GreipClient::new("your-api-key")?.with_test_mode(true);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct GreipClient {
    http: Client,
    base_url: Arc<Url>,
    token: String,
    test_mode: bool,
}

impl std::fmt::Debug for GreipClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GreipClient")
            .field("base_url", &self.base_url.as_str())
            .field("test_mode", &self.test_mode)
            .finish_non_exhaustive()
    }
}

impl GreipClient {
    /// Create a client from environment variables.
    ///
    /// Uses `GREIP_API_KEY` for authentication, optionally `GREIP_API_URL`
    /// for the base URL (defaults to `https://greipapi.com/`) and
    /// `GREIP_TEST_MODE` (`1`, `true` or `yes`) to enable test mode.
    ///
    /// # Errors
    ///
    /// Returns an error if `GREIP_API_KEY` is not set or the URL is invalid.
    pub fn from_env() -> Result<Self> {
        let token = env::var("GREIP_API_KEY").map_err(|_| {
            GreipError::ConfigMissing("GREIP_API_KEY environment variable not set".to_string())
        })?;

        let base_url = env::var("GREIP_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let test_mode = env::var("GREIP_TEST_MODE")
            .map(|v| is_truthy(&v))
            .unwrap_or(false);

        Ok(Self::new(&token)?
            .with_base_url(&base_url)?
            .with_test_mode(test_mode))
    }

    /// Create a new client for the production API with test mode off.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(token: &str) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(GreipError::Http)?;

        Ok(Self {
            http,
            base_url: Arc::new(parse_base_url(DEFAULT_API_URL)?),
            token: token.to_string(),
            test_mode: false,
        })
    }

    /// Enable or disable test mode.
    #[must_use]
    pub fn with_test_mode(mut self, test_mode: bool) -> Self {
        self.test_mode = test_mode;
        self
    }

    /// Point the client at another base URL, e.g. a mock server.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.set_base_url(base_url)?;
        Ok(self)
    }

    /// Replace the base URL in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid; the old URL is kept.
    pub fn set_base_url(&mut self, base_url: &str) -> Result<()> {
        self.base_url = Arc::new(parse_base_url(base_url)?);
        Ok(())
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns true if requests are sent in test mode.
    pub fn is_test_mode(&self) -> bool {
        self.test_mode
    }

    /// Call a GET endpoint with `payload` as the query string and decode
    /// the envelope's `data` into `T`.
    ///
    /// # Errors
    ///
    /// [`GreipError::Transport`] for non-2xx statuses, envelope errors from
    /// [`decode_envelope`], or [`GreipError::Http`] if the request fails.
    #[tracing::instrument(skip(self, payload))]
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str, mut payload: Payload) -> Result<T> {
        let url = self.base_url.join(endpoint)?;

        if self.test_mode {
            payload.insert(MODE_KEY, MODE_TEST);
        }

        tracing::debug!(params = payload.len(), test_mode = self.test_mode, "sending request");

        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .header(CONTENT_TYPE, "application/json")
            .query(&payload.to_query_pairs())
            .send()
            .await
            .map_err(GreipError::Http)?;

        Self::read_envelope(response).await
    }

    /// Call a POST endpoint with `payload` as the JSON body and decode the
    /// envelope's `data` into `T`.
    ///
    /// # Errors
    ///
    /// As [`get`](Self::get), plus [`GreipError::Encode`] if the payload
    /// cannot be serialized.
    #[tracing::instrument(skip(self, payload))]
    pub async fn post<T: DeserializeOwned>(&self, endpoint: &str, mut payload: Payload) -> Result<T> {
        let url = self.base_url.join(endpoint)?;

        if self.test_mode {
            payload.insert(MODE_KEY, MODE_TEST);
        }

        let body = serde_json::to_vec(&payload).map_err(GreipError::Encode)?;

        tracing::debug!(bytes = body.len(), test_mode = self.test_mode, "sending request");

        let response = self
            .http
            .post(url)
            .bearer_auth(&self.token)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(GreipError::Http)?;

        Self::read_envelope(response).await
    }

    /// Check the status, then decode the body as an envelope.
    async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        tracing::debug!(status = status.as_u16(), "received response");

        if !status.is_success() {
            return Err(GreipError::Transport {
                status_code: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(GreipError::Http)?;
        decode_envelope(&body)
    }
}

/// Parse a base URL, making sure it ends with `/` so endpoint names join
/// under it rather than replacing its last segment.
fn parse_base_url(base_url: &str) -> Result<Url> {
    let base_url = if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{base_url}/")
    };
    Ok(Url::parse(&base_url)?)
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_debug() {
        let client = GreipClient::new("test-token").unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("GreipClient"));
        assert!(debug.contains("base_url"));
        // Token should not be in debug output
        assert!(!debug.contains("test-token"));
    }

    #[test]
    fn test_defaults() {
        let client = GreipClient::new("token").unwrap();
        assert_eq!(client.base_url().as_str(), "https://greipapi.com/");
        assert!(!client.is_test_mode());
        assert!(client.with_test_mode(true).is_test_mode());
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client1 = GreipClient::new("token")
            .unwrap()
            .with_base_url("http://localhost:8080/api")
            .unwrap();
        let client2 = GreipClient::new("token")
            .unwrap()
            .with_base_url("http://localhost:8080/api/")
            .unwrap();
        assert_eq!(client1.base_url().as_str(), client2.base_url().as_str());
        assert_eq!(
            client1.base_url().join("IPLookup").unwrap().as_str(),
            "http://localhost:8080/api/IPLookup"
        );
    }

    #[test]
    fn test_invalid_base_url_keeps_previous() {
        let mut client = GreipClient::new("token").unwrap();
        assert!(matches!(
            client.set_base_url("not a url"),
            Err(GreipError::Url(_))
        ));
        assert_eq!(client.base_url().as_str(), DEFAULT_API_URL);
    }

    #[test]
    fn test_truthy_values() {
        for v in ["1", "true", "TRUE", " yes ", "on"] {
            assert!(is_truthy(v), "{v:?}");
        }
        for v in ["0", "false", "", "no"] {
            assert!(!is_truthy(v), "{v:?}");
        }
    }
}
