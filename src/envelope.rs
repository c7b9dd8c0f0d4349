//! Greip response envelope decoding.
//!
//! Every Greip endpoint answers with the same wrapper:
//!
//! ```json
//! {"status": "success", "data": { ... }}
//! {"status": "error", "description": "..."}
//! ```
//!
//! The wrapper is parsed once with the payload kept as raw JSON, then only
//! the payload is decoded into the caller's target type.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::value::RawValue;

use crate::error::{GreipError, Result};

/// Wire shape of the envelope. The payload stays unparsed until the status
/// has been checked.
#[derive(Debug, Deserialize)]
struct RawEnvelope<'a> {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, borrow)]
    data: Option<&'a RawValue>,
}

/// Outcome of an envelope after the status has been interpreted.
#[derive(Debug)]
enum Envelope<'a> {
    Success(&'a RawValue),
    Failure(String),
}

impl<'a> TryFrom<RawEnvelope<'a>> for Envelope<'a> {
    type Error = GreipError;

    fn try_from(raw: RawEnvelope<'a>) -> Result<Self> {
        let is_error = raw
            .status
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case("error"));

        if is_error {
            return match raw.description {
                Some(description) => Ok(Self::Failure(description)),
                None => Err(GreipError::MalformedEnvelope(
                    "error status without description".to_string(),
                )),
            };
        }

        match raw.data {
            Some(data) if data.get() != "null" => Ok(Self::Success(data)),
            _ => Err(GreipError::MalformedEnvelope(
                "missing data field".to_string(),
            )),
        }
    }
}

/// Decode a raw response body into `T`.
///
/// # Errors
///
/// - [`GreipError::Api`] when the envelope status is `error` (any case).
/// - [`GreipError::MalformedEnvelope`] when the body is not an envelope
///   object, an error status has no description, or a non-error envelope
///   has no `data`.
/// - [`GreipError::Decode`] when `data` does not match `T`.
pub fn decode_envelope<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let raw: RawEnvelope<'_> = serde_json::from_slice(body)
        .map_err(|e| GreipError::MalformedEnvelope(e.to_string()))?;

    match Envelope::try_from(raw)? {
        Envelope::Success(data) => decode_data(data),
        Envelope::Failure(description) => Err(GreipError::Api { description }),
    }
}

/// Decode the payload, keeping the path of the field that failed.
fn decode_data<T: DeserializeOwned>(data: &RawValue) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_str(data.get());
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| GreipError::Decode {
        path: e.path().to_string(),
        source: e.into_inner(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IpLookup;
    use std::collections::HashMap;

    #[test]
    fn test_error_status_yields_api_error() {
        let body = br#"{"status":"error","description":"bad token"}"#;
        match decode_envelope::<IpLookup>(body) {
            Err(GreipError::Api { description }) => assert_eq!(description, "bad token"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_error_status_is_case_insensitive() {
        let body = br#"{"status":"ERROR","description":"quota exceeded","data":{}}"#;
        assert!(matches!(
            decode_envelope::<IpLookup>(body),
            Err(GreipError::Api { .. })
        ));
    }

    #[test]
    fn test_error_without_description_is_malformed() {
        let body = br#"{"status":"error"}"#;
        assert!(matches!(
            decode_envelope::<IpLookup>(body),
            Err(GreipError::MalformedEnvelope(_))
        ));
    }

    #[test]
    fn test_success_decodes_data() {
        let body = br#"{"status":"success","data":{"ip":"1.1.1.1","ipType":"v4"}}"#;
        let lookup: IpLookup = decode_envelope(body).unwrap();
        assert_eq!(lookup.ip, "1.1.1.1");
        assert_eq!(lookup.ip_type, "v4");
    }

    #[test]
    fn test_missing_status_with_data_is_success() {
        let body = br#"{"data":{"a":1}}"#;
        let map: HashMap<String, u32> = decode_envelope(body).unwrap();
        assert_eq!(map["a"], 1);
    }

    #[test]
    fn test_missing_data_is_malformed() {
        let body = br#"{"status":"success","description":"ok"}"#;
        match decode_envelope::<IpLookup>(body) {
            Err(GreipError::MalformedEnvelope(msg)) => assert_eq!(msg, "missing data field"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_null_data_is_malformed() {
        let body = br#"{"status":"success","data":null}"#;
        assert!(matches!(
            decode_envelope::<IpLookup>(body),
            Err(GreipError::MalformedEnvelope(_))
        ));
    }

    #[test]
    fn test_non_object_body_is_malformed() {
        let bodies: [&[u8]; 3] = [b"not json", b"[1,2,3]", b"\"ok\""];
        for body in bodies {
            assert!(matches!(
                decode_envelope::<IpLookup>(body),
                Err(GreipError::MalformedEnvelope(_))
            ));
        }
    }

    #[test]
    fn test_shape_mismatch_is_decode_error() {
        let body = br#"{"status":"success","data":{"ip":42}}"#;
        match decode_envelope::<IpLookup>(body) {
            Err(GreipError::Decode { path, source }) => {
                assert_eq!(path, "ip");
                assert!(source.is_data());
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_decode_error_names_nested_field() {
        let body = br#"{"status":"success","data":{"ip":"1.1.1.1","location":{"population":"many"}}}"#;
        let err = decode_envelope::<IpLookup>(body).unwrap_err();
        match err {
            GreipError::Decode { ref path, .. } => assert_eq!(path, "location.population"),
            ref other => panic!("unexpected result: {other:?}"),
        }
        assert!(err.to_string().contains("`location.population`"));
    }

    #[test]
    fn test_decode_error_in_bulk_map_names_key() {
        let body = br#"{"status":"success","data":{"8.8.8.8":{"ip":"8.8.8.8","latitude":1}}}"#;
        match decode_envelope::<HashMap<String, IpLookup>>(body) {
            Err(GreipError::Decode { path, .. }) => assert_eq!(path, "8.8.8.8.latitude"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
