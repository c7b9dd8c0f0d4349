//! Greip API client library.
//!
//! A Rust library for the [Greip](https://greip.io) IP intelligence and
//! fraud-prevention API: IP geolocation, threat intelligence, country data,
//! ASN lookup, profanity detection, email/phone/IBAN validation and payment
//! fraud scoring.
//!
//! # Quick Start
//!
//! ```no_run
//! use greip::GreipClient;
//!
//! #[tokio::main]
//! async fn main() -> greip::Result<()> {
//!     // Create client from environment variables
//!     let client = GreipClient::from_env()?;
//!
//!     // Geolocate an IP with its security flags
//!     let lookup = client.ip_lookup("1.1.1.1", &["security"], None).await?;
//!     println!("{} is in {}", lookup.ip, lookup.place());
//!
//!     // Validate an email address
//!     let email = client.validate_email("name@domain.com").await?;
//!     println!("valid: {}", email.is_valid);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Every operation runs the same pipeline:
//!
//! 1. Validate inputs (required values, `params` allow-list, language)
//!    before touching the network.
//! 2. Send the request with bearer authentication, adding `mode=test` when
//!    the client is in test mode.
//! 3. Reject non-2xx statuses, then unwrap the `{status, description, data}`
//!    envelope and decode `data` into the operation's result type.
//!
//! # Configuration
//!
//! [`GreipClient::from_env`] reads:
//!
//! - `GREIP_API_KEY` (required) - Your Greip API token
//! - `GREIP_API_URL` (optional) - Base URL (defaults to `https://greipapi.com/`)
//! - `GREIP_TEST_MODE` (optional) - `1`/`true`/`yes` to send test-mode requests

pub mod cli;
mod client;
mod endpoint;
mod envelope;
mod error;
mod models;
mod output;
mod payload;
mod validate;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::GreipClient;
pub use endpoint::Endpoint;
pub use envelope::decode_envelope;
pub use error::{GreipError, Result};
pub use output::PrettyPrint;
pub use payload::Payload;
pub use validate::{
    validate_language, validate_params, COUNTRY_PARAMS, DEFAULT_LANGUAGE, GEOIP_PARAMS,
    SUPPORTED_LANGUAGES,
};

// Re-export models
pub use models::{
    // IP lookup types
    Asn,
    Browser,
    Device,
    Flag,
    FlagPng,
    IpLookup,
    Language,
    Location,
    OperatingSystem,
    Security,
    SunInfo,
    Timezone,
    // Threat types
    Threats,
    ThreatsResult,
    // Country types
    CountryInfo,
    Currency,
    // Other lookups
    AsnDetails,
    IpTotal,
    ProfanityResult,
    // Validation types
    CentralBank,
    EmailValidation,
    IbanBank,
    IbanCountry,
    IbanFormats,
    IbanValidation,
    PhoneValidation,
    // Payment types
    PaymentFraud,
    PaymentRule,
};
