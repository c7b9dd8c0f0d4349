//! Request payloads.
//!
//! A [`Payload`] is the per-call mapping from upstream parameter name to
//! value. GET endpoints send it as the query string, POST endpoints as the
//! JSON body.

use serde::Serialize;
use serde_json::{Map, Value};

/// Parameter name → value mapping for a single request.
///
/// Keys are kept in sorted order so the encoded form is deterministic.
/// Inserting an existing key replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Payload(Map<String, Value>);

impl Payload {
    /// Create an empty payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up a parameter.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns true if no parameter is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Query-string pairs with every value formatted as a string.
    ///
    /// String values are sent as-is (no JSON quoting); everything else uses
    /// its JSON text.
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(key, value)| {
                let value = match value {
                    Value::String(s) => s.clone(),
                    Value::Null => String::new(),
                    other => other.to_string(),
                };
                (key.clone(), value)
            })
            .collect()
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
