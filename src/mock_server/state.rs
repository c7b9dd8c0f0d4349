//! Mock server state management.
//!
//! Provides the in-memory data store for the mock Greip API server, plus a
//! log of every request it received.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;

use crate::{AsnDetails, CountryInfo, IpLookup};

/// A request as seen by the mock server.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    /// Endpoint path segment, e.g. `"IPLookup"`.
    pub endpoint: String,
    /// Decoded query parameters.
    pub query: HashMap<String, String>,
    /// JSON body, for POST endpoints.
    pub body: Option<Value>,
    /// Raw `Authorization` header value.
    pub authorization: Option<String>,
}

impl RecordedRequest {
    /// Returns true if the request was flagged as test mode, in either the
    /// query string or the JSON body.
    pub fn is_test_mode(&self) -> bool {
        self.query.get("mode").map(String::as_str) == Some("test")
            || self
                .body
                .as_ref()
                .and_then(|b| b.get("mode"))
                .and_then(Value::as_str)
                == Some("test")
    }
}

/// Shared state for the mock server.
///
/// This struct holds all the mock data that the server will serve.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    /// IP lookup results indexed by IP. Threat checks derive from the
    /// `security` section of these.
    pub lookups: HashMap<String, IpLookup>,

    /// Countries indexed by upper-case ISO code.
    pub countries: HashMap<String, CountryInfo>,

    /// AS records indexed by upper-case AS number (e.g. "AS13335").
    pub asns: HashMap<String, AsnDetails>,

    /// Words the profanity endpoint flags, lower-case.
    pub bad_words: Vec<String>,

    /// Optional authentication token. If set, requests must include this token.
    pub required_token: Option<String>,

    /// If set, every endpoint answers with this HTTP status and no envelope.
    pub forced_status: Option<u16>,

    /// Every request received, oldest first.
    pub requests: Vec<RecordedRequest>,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add an IP lookup result to the state.
    pub fn with_lookup(mut self, lookup: IpLookup) -> Self {
        self.lookups.insert(lookup.ip.clone(), lookup);
        self
    }

    /// Add a country to the state.
    pub fn with_country(mut self, country: CountryInfo) -> Self {
        self.countries
            .insert(country.country_code.to_uppercase(), country);
        self
    }

    /// Add an AS record to the state.
    pub fn with_asn(mut self, asn: AsnDetails) -> Self {
        self.asns.insert(asn.asn.to_uppercase(), asn);
        self
    }

    /// Add a word for the profanity endpoint to flag.
    pub fn with_bad_word(mut self, word: &str) -> Self {
        self.bad_words.push(word.to_lowercase());
        self
    }

    /// Set the required authentication token.
    pub fn with_required_token(mut self, token: &str) -> Self {
        self.required_token = Some(token.to_string());
        self
    }

    /// Answer every request with a bare HTTP status.
    pub fn with_forced_status(mut self, status: u16) -> Self {
        self.forced_status = Some(status);
        self
    }

    /// Get an IP lookup result.
    pub fn get_lookup(&self, ip: &str) -> Option<&IpLookup> {
        self.lookups.get(ip)
    }

    /// Get a country by code, ignoring case.
    pub fn get_country(&self, code: &str) -> Option<&CountryInfo> {
        self.countries.get(&code.to_uppercase())
    }

    /// Get an AS record. Accepts `"13335"` as well as `"AS13335"`.
    pub fn get_asn(&self, asn: &str) -> Option<&AsnDetails> {
        let upper = asn.to_uppercase();
        self.asns
            .get(&upper)
            .or_else(|| self.asns.get(&format!("AS{upper}")))
    }

    /// Count flagged words in `text`.
    pub fn count_bad_words(&self, text: &str) -> u32 {
        let count = text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|word| !word.is_empty())
            .filter(|word| self.bad_words.contains(&word.to_lowercase()))
            .count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    /// Check a bearer `Authorization` header against the required token.
    pub fn is_authorized(&self, authorization: Option<&str>) -> bool {
        match self.required_token {
            Some(ref token) => authorization
                .and_then(|h| h.strip_prefix("Bearer "))
                .is_some_and(|t| t == token),
            None => true,
        }
    }

    /// Append a request to the log.
    pub fn record(&mut self, request: RecordedRequest) {
        self.requests.push(request);
    }

    /// Requests received for one endpoint.
    pub fn requests_for(&self, endpoint: &str) -> Vec<&RecordedRequest> {
        self.requests
            .iter()
            .filter(|r| r.endpoint == endpoint)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_add_and_get_lookup() {
        let state = MockState::new().with_lookup(IpLookup {
            ip: "1.1.1.1".into(),
            ..Default::default()
        });
        assert!(state.get_lookup("1.1.1.1").is_some());
        assert!(state.get_lookup("8.8.8.8").is_none());
    }

    #[test]
    fn test_state_country_lookup_ignores_case() {
        let state = MockState::new().with_country(CountryInfo {
            country_code: "nl".into(),
            ..Default::default()
        });
        assert!(state.get_country("NL").is_some());
        assert!(state.get_country("nl").is_some());
    }

    #[test]
    fn test_state_asn_prefix_optional() {
        let state = MockState::new().with_asn(AsnDetails {
            asn: "AS13335".into(),
            ..Default::default()
        });
        assert!(state.get_asn("AS13335").is_some());
        assert!(state.get_asn("as13335").is_some());
        assert!(state.get_asn("13335").is_some());
    }

    #[test]
    fn test_state_bad_words() {
        let state = MockState::new().with_bad_word("Darn").with_bad_word("heck");
        assert_eq!(state.count_bad_words("Darn it, what the HECK... darn!"), 3);
        assert_eq!(state.count_bad_words("all good here"), 0);
    }

    #[test]
    fn test_state_authorization() {
        let open = MockState::new();
        assert!(open.is_authorized(None));

        let locked = MockState::new().with_required_token("secret");
        assert!(locked.is_authorized(Some("Bearer secret")));
        assert!(!locked.is_authorized(Some("Bearer wrong")));
        assert!(!locked.is_authorized(Some("secret")));
        assert!(!locked.is_authorized(None));
    }

    #[test]
    fn test_recorded_request_test_mode() {
        let mut query = HashMap::new();
        query.insert("mode".to_string(), "test".to_string());
        let get = RecordedRequest {
            endpoint: "IPLookup".into(),
            query,
            body: None,
            authorization: None,
        };
        assert!(get.is_test_mode());

        let post = RecordedRequest {
            endpoint: "paymentFraud".into(),
            query: HashMap::new(),
            body: Some(serde_json::json!({"data": {}, "mode": "test"})),
            authorization: None,
        };
        assert!(post.is_test_mode());

        let live = RecordedRequest {
            body: Some(serde_json::json!({"data": {}})),
            ..post
        };
        assert!(!live.is_test_mode());
    }
}
