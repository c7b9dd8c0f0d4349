//! Error types for Greip API operations.

use thiserror::Error;

/// Errors that can occur during Greip API operations.
///
/// Every error is terminal for the call that produced it. Validation errors
/// (`MissingParameter`, `InvalidParameter`, `UnsupportedLanguage`) are raised
/// before any network access.
#[derive(Debug, Error)]
pub enum GreipError {
    /// Configuration is missing or incomplete.
    #[error("Greip configuration required: {0}")]
    ConfigMissing(String),

    /// A required input was empty.
    #[error("you must provide the `{0}` parameter")]
    MissingParameter(&'static str),

    /// A requested optional parameter is not offered by the endpoint.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The requested response language is not supported.
    #[error("invalid language: {0}")]
    UnsupportedLanguage(String),

    /// The upstream answered with a non-2xx HTTP status.
    #[error("HTTP request failed with status code: {status_code}")]
    Transport { status_code: u16 },

    /// The response body is not a well-formed Greip envelope.
    #[error("invalid response format: {0}")]
    MalformedEnvelope(String),

    /// The upstream reported an error in the envelope.
    #[error("API error: {description}")]
    Api { description: String },

    /// The envelope payload did not match the expected shape.
    ///
    /// `path` locates the offending field inside `data`, e.g.
    /// `location.population`, or `.` for the payload itself.
    #[error("Failed to decode response data at `{path}`: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The request payload could not be serialized.
    #[error("Failed to encode request payload: {0}")]
    Encode(#[source] serde_json::Error),

    /// HTTP transport error (connection, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl GreipError {
    /// Returns true for errors raised by input validation, before any request
    /// was sent.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingParameter(_) | Self::InvalidParameter(_) | Self::UnsupportedLanguage(_)
        )
    }

    /// HTTP status code carried by the error, if any.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Transport { status_code } => Some(*status_code),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias for Greip operations.
pub type Result<T> = core::result::Result<T, GreipError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_flagged() {
        assert!(GreipError::MissingParameter("ip").is_validation());
        assert!(GreipError::InvalidParameter("foo".into()).is_validation());
        assert!(GreipError::UnsupportedLanguage("xx".into()).is_validation());
        assert!(!GreipError::Transport { status_code: 500 }.is_validation());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GreipError::MissingParameter("ip").to_string(),
            "you must provide the `ip` parameter"
        );
        assert_eq!(
            GreipError::Api {
                description: "bad token".into()
            }
            .to_string(),
            "API error: bad token"
        );
        assert_eq!(
            GreipError::Transport { status_code: 500 }.status_code(),
            Some(500)
        );
    }
}
