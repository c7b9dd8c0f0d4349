//! Email, phone and IBAN validation handlers.
//!
//! The checks are simplified stand-ins for the upstream's rules, but IBANs
//! get the real ISO 13616 mod-97 checksum.

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::Response,
};

use super::{admit, failure, required, success, SharedState};
use crate::{EmailValidation, IbanFormats, IbanValidation, PhoneValidation};

/// Why `email` is not a plausible address, if it is not.
pub fn email_problem(email: &str) -> Option<&'static str> {
    let Some((local, domain)) = email.split_once('@') else {
        return Some("missing @");
    };
    if local.is_empty() {
        return Some("empty local part");
    }
    if domain.starts_with('.') || domain.ends_with('.') || !domain.contains('.') {
        return Some("invalid domain");
    }
    None
}

/// Why `phone` is not a plausible number, if it is not.
pub fn phone_problem(phone: &str) -> Option<&'static str> {
    let digits = phone.trim_start_matches('+');
    if !digits
        .chars()
        .all(|c| c.is_ascii_digit() || c == ' ' || c == '-')
    {
        return Some("invalid characters");
    }
    let count = digits.chars().filter(char::is_ascii_digit).count();
    if !(7..=15).contains(&count) {
        return Some("invalid length");
    }
    None
}

/// IBAN with spaces removed and letters upper-cased.
pub fn normalize_iban(iban: &str) -> String {
    iban.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// ISO 13616 check: move the first four characters to the end, map letters
/// to 10..=35 and require the number mod 97 to be 1.
pub fn iban_checksum_valid(iban: &str) -> bool {
    let iban = normalize_iban(iban);
    if iban.len() < 15 || iban.len() > 34 || !iban.chars().all(|c| c.is_ascii_alphanumeric()) {
        return false;
    }
    let (head, tail) = iban.split_at(4);
    let mut remainder: u32 = 0;
    for c in tail.chars().chain(head.chars()) {
        // to_digit(36) maps 0-9 to 0..=9 and A-Z to 10..=35
        let Some(value) = c.to_digit(36) else {
            return false;
        };
        remainder = if value < 10 {
            (remainder * 10 + value) % 97
        } else {
            (remainder * 100 + value) % 97
        };
    }
    remainder == 1
}

/// Human-readable IBAN in groups of four.
fn group_iban(iban: &str) -> String {
    iban.as_bytes()
        .chunks(4)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// GET /validateEmail
pub async fn validate_email(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    if let Some(rejection) = admit(&state, "validateEmail", &headers, &query, None).await {
        return rejection;
    }

    let Some(email) = required(&query, "email") else {
        return failure("you must provide the `email` parameter");
    };

    let problem = email_problem(email);
    success(EmailValidation {
        email: email.to_string(),
        is_valid: problem.is_none(),
        score: if problem.is_some() { 100 } else { 0 },
        reason: problem.unwrap_or_default().to_string(),
    })
}

/// GET /validatePhone
pub async fn validate_phone(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    if let Some(rejection) = admit(&state, "validatePhone", &headers, &query, None).await {
        return rejection;
    }

    let Some(phone) = required(&query, "phone") else {
        return failure("you must provide the `phone` parameter");
    };
    let Some(country_code) = required(&query, "countryCode") else {
        return failure("you must provide the `countryCode` parameter");
    };

    let problem = phone_problem(phone);
    success(PhoneValidation {
        phone: phone.to_string(),
        country_code: country_code.to_uppercase(),
        is_valid: problem.is_none(),
        carrier: String::new(),
        reason: problem.unwrap_or_default().to_string(),
    })
}

/// GET /validateIBAN
pub async fn validate_iban(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    if let Some(rejection) = admit(&state, "validateIBAN", &headers, &query, None).await {
        return rejection;
    }

    let Some(iban) = required(&query, "iban") else {
        return failure("you must provide the `iban` parameter");
    };

    let machine = normalize_iban(iban);
    let mut result = IbanValidation {
        is_valid: iban_checksum_valid(&machine),
        iban: iban.to_string(),
        formats: IbanFormats {
            human: group_iban(&machine),
            obfuscated: String::new(),
            machine: machine.clone(),
        },
        ..Default::default()
    };
    if let Some(code) = machine.get(..2) {
        result.country.iso3166 = code.to_string();
    }
    success(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iban_checksum() {
        assert!(iban_checksum_valid("GB82WEST12345698765432"));
        assert!(iban_checksum_valid("gb82 west 1234 5698 7654 32"));
        assert!(iban_checksum_valid("NL91ABNA0417164300"));
        assert!(!iban_checksum_valid("GB83WEST12345698765432"));
        assert!(!iban_checksum_valid("GB82"));
        assert!(!iban_checksum_valid("GB82WEST1234569876543!"));
    }

    #[test]
    fn test_group_iban() {
        assert_eq!(group_iban("NL91ABNA0417164300"), "NL91 ABNA 0417 1643 00");
    }

    #[test]
    fn test_email_problem() {
        assert_eq!(email_problem("name@domain.com"), None);
        assert_eq!(email_problem("name.domain.com"), Some("missing @"));
        assert_eq!(email_problem("@domain.com"), Some("empty local part"));
        assert_eq!(email_problem("name@localhost"), Some("invalid domain"));
    }

    #[test]
    fn test_phone_problem() {
        assert_eq!(phone_problem("+31 612-345-678"), None);
        assert_eq!(phone_problem("12345"), Some("invalid length"));
        assert_eq!(phone_problem("call me"), Some("invalid characters"));
    }
}
