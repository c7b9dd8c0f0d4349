//! Input validation against the upstream's fixed allow-lists.

use crate::error::{GreipError, Result};

/// Optional data sections accepted by the IP lookup endpoints.
pub const GEOIP_PARAMS: &[&str] = &["location", "security", "timezone", "currency", "device"];

/// Optional data sections accepted by the country endpoint.
pub const COUNTRY_PARAMS: &[&str] = &["language", "flag", "currency", "timezone"];

/// Response languages accepted by the upstream, upper-case.
pub const SUPPORTED_LANGUAGES: &[&str] = &["EN", "AR", "DE", "FR", "ES", "JA", "ZH", "RU"];

/// Language used when the caller does not pick one.
pub const DEFAULT_LANGUAGE: &str = "EN";

/// Check every requested parameter against `allowed`.
///
/// Matching is exact and case-sensitive. An empty request always passes.
///
/// # Errors
///
/// Returns [`GreipError::InvalidParameter`] naming the first value not in
/// `allowed`.
pub fn validate_params<S: AsRef<str>>(requested: &[S], allowed: &[&str]) -> Result<()> {
    match requested
        .iter()
        .map(|param| param.as_ref())
        .find(|param| !allowed.contains(param))
    {
        Some(param) => Err(GreipError::InvalidParameter(param.to_string())),
        None => Ok(()),
    }
}

/// Check a language code against [`SUPPORTED_LANGUAGES`], ignoring case.
///
/// Returns the upper-cased code as sent on the wire.
///
/// # Errors
///
/// Returns [`GreipError::UnsupportedLanguage`] with the code as given.
pub fn validate_language(code: &str) -> Result<String> {
    let upper = code.to_uppercase();
    if SUPPORTED_LANGUAGES.contains(&upper.as_str()) {
        Ok(upper)
    } else {
        Err(GreipError::UnsupportedLanguage(code.to_string()))
    }
}
