//! Greip endpoints.
//!
//! Every operation follows the same template: check required inputs, check
//! optional `params` against the endpoint's allow-list, default and check the
//! language, build the payload, then hand it to the executor in
//! [`GreipClient`]. The template lives in [`Call`]; the public operations are
//! one-line compositions of it.

use std::collections::HashMap;
use std::fmt;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::client::GreipClient;
use crate::error::{GreipError, Result};
use crate::models::{
    AsnDetails, CountryInfo, EmailValidation, IbanValidation, IpLookup, PaymentFraud,
    PhoneValidation, ProfanityResult, ThreatsResult,
};
use crate::payload::Payload;
use crate::validate::{
    validate_language, validate_params, COUNTRY_PARAMS, DEFAULT_LANGUAGE, GEOIP_PARAMS,
};

/// A Greip API operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    IpLookup,
    BulkLookup,
    Threats,
    Country,
    Profanity,
    AsnLookup,
    Email,
    Phone,
    Iban,
    PaymentFraud,
}

impl Endpoint {
    /// Every endpoint, in documentation order.
    pub const ALL: [Endpoint; 10] = [
        Endpoint::IpLookup,
        Endpoint::BulkLookup,
        Endpoint::Threats,
        Endpoint::Country,
        Endpoint::Profanity,
        Endpoint::AsnLookup,
        Endpoint::Email,
        Endpoint::Phone,
        Endpoint::Iban,
        Endpoint::PaymentFraud,
    ];

    /// Path segment appended to the base URL.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::IpLookup => "IPLookup",
            Endpoint::BulkLookup => "BulkLookup",
            Endpoint::Threats => "threats",
            Endpoint::Country => "Country",
            Endpoint::Profanity => "badWords",
            Endpoint::AsnLookup => "ASNLookup",
            Endpoint::Email => "validateEmail",
            Endpoint::Phone => "validatePhone",
            Endpoint::Iban => "validateIBAN",
            Endpoint::PaymentFraud => "paymentFraud",
        }
    }

    /// HTTP method. Only payment scoring posts a body.
    pub fn method(self) -> Method {
        match self {
            Endpoint::PaymentFraud => Method::POST,
            _ => Method::GET,
        }
    }

    /// Values accepted in the `params` list. Empty for endpoints without one.
    pub fn allowed_params(self) -> &'static [&'static str] {
        match self {
            Endpoint::IpLookup | Endpoint::BulkLookup => GEOIP_PARAMS,
            Endpoint::Country => COUNTRY_PARAMS,
            _ => &[],
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// One validated request, ready for the executor.
#[derive(Debug, Clone)]
pub(crate) struct Call {
    endpoint: Endpoint,
    payload: Payload,
}

impl Call {
    pub(crate) fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            payload: Payload::new(),
        }
    }

    /// Add a required string input.
    pub(crate) fn require(self, name: &'static str, value: &str) -> Result<Self> {
        self.require_as(name, name, value)
    }

    /// Add a required string input sent under a wire key that differs from
    /// the name reported when it is missing.
    pub(crate) fn require_as(
        mut self,
        key: &'static str,
        name: &'static str,
        value: &str,
    ) -> Result<Self> {
        if value.is_empty() {
            return Err(GreipError::MissingParameter(name));
        }
        self.payload.insert(key, value);
        Ok(self)
    }

    /// Add a required list input, sent comma-joined.
    pub(crate) fn require_list(mut self, name: &'static str, values: &[&str]) -> Result<Self> {
        if values.is_empty() || values.iter().any(|v| v.is_empty()) {
            return Err(GreipError::MissingParameter(name));
        }
        self.payload.insert(name, values.join(","));
        Ok(self)
    }

    /// Add the optional `params` list, checked against the endpoint.
    pub(crate) fn params(mut self, requested: &[&str]) -> Result<Self> {
        validate_params(requested, self.endpoint.allowed_params())?;
        self.payload.insert("params", requested.join(","));
        Ok(self)
    }

    /// Add the response language, defaulting to English.
    pub(crate) fn lang(mut self, lang: Option<&str>) -> Result<Self> {
        let lang = validate_language(lang.unwrap_or(DEFAULT_LANGUAGE))?;
        self.payload.insert("lang", lang);
        Ok(self)
    }

    /// Add a required JSON object input.
    pub(crate) fn body(mut self, name: &'static str, value: Value) -> Result<Self> {
        match value {
            Value::Object(map) if !map.is_empty() => {
                self.payload.insert(name, Value::Object(map));
                Ok(self)
            }
            Value::Object(_) | Value::Null => Err(GreipError::MissingParameter(name)),
            _ => Err(GreipError::InvalidParameter(format!(
                "{name}: expected a JSON object"
            ))),
        }
    }

    pub(crate) fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    pub(crate) fn into_payload(self) -> Payload {
        self.payload
    }
}

impl GreipClient {
    /// Run a validated call through the GET or POST executor.
    async fn execute<T: DeserializeOwned>(&self, call: Call) -> Result<T> {
        let endpoint = call.endpoint();
        let payload = call.into_payload();
        if endpoint.method() == Method::POST {
            self.post(endpoint.path(), payload).await
        } else {
            self.get(endpoint.path(), payload).await
        }
    }

    /// Geolocate an IP address.
    ///
    /// `params` selects extra sections out of `location`, `security`,
    /// `timezone`, `currency` and `device`. `lang` defaults to `EN`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example(client: &greip::GreipClient) -> greip::Result<()> {
    /// let result = client.ip_lookup("1.1.1.1", &["security", "timezone"], None).await?;
    /// println!("{} is in {}", result.ip, result.country_name);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Validation errors for an empty `ip`, unknown `params` or an
    /// unsupported `lang`; transport, envelope or decode errors otherwise.
    pub async fn ip_lookup(
        &self,
        ip: &str,
        params: &[&str],
        lang: Option<&str>,
    ) -> Result<IpLookup> {
        let call = Call::new(Endpoint::IpLookup)
            .require("ip", ip)?
            .params(params)?
            .lang(lang)?;
        self.execute(call).await
    }

    /// Geolocate several IP addresses in one request.
    ///
    /// Results are keyed by IP address.
    ///
    /// # Errors
    ///
    /// As [`ip_lookup`](Self::ip_lookup); `ips` must be non-empty.
    pub async fn bulk_lookup(
        &self,
        ips: &[&str],
        params: &[&str],
        lang: Option<&str>,
    ) -> Result<HashMap<String, IpLookup>> {
        let call = Call::new(Endpoint::BulkLookup)
            .require_list("ips", ips)?
            .params(params)?
            .lang(lang)?;
        self.execute(call).await
    }

    /// Classify an IP address as proxy, Tor exit, bot, relay or hosting.
    ///
    /// # Errors
    ///
    /// [`GreipError::MissingParameter`] for an empty `ip`; request errors
    /// otherwise.
    pub async fn threats(&self, ip: &str) -> Result<ThreatsResult> {
        let call = Call::new(Endpoint::Threats).require("ip", ip)?;
        self.execute(call).await
    }

    /// Fetch country metadata by ISO 3166-1 alpha-2 code.
    ///
    /// `params` selects extra sections out of `language`, `flag`,
    /// `currency` and `timezone`.
    ///
    /// # Errors
    ///
    /// Validation errors for an empty code, unknown `params` or an
    /// unsupported `lang`; request errors otherwise.
    pub async fn country(
        &self,
        country_code: &str,
        params: &[&str],
        lang: Option<&str>,
    ) -> Result<CountryInfo> {
        let call = Call::new(Endpoint::Country)
            .require_as("CountryCode", "countryCode", country_code)?
            .params(params)?
            .lang(lang)?;
        self.execute(call).await
    }

    /// Scan a text for profanity.
    pub async fn profanity(&self, text: &str) -> Result<ProfanityResult> {
        let call = Call::new(Endpoint::Profanity).require("text", text)?;
        self.execute(call).await
    }

    /// Look up an autonomous system, e.g. `"AS13335"`.
    pub async fn asn_lookup(&self, asn: &str) -> Result<AsnDetails> {
        let call = Call::new(Endpoint::AsnLookup).require("asn", asn)?;
        self.execute(call).await
    }

    /// Validate an email address.
    pub async fn validate_email(&self, email: &str) -> Result<EmailValidation> {
        let call = Call::new(Endpoint::Email).require("email", email)?;
        self.execute(call).await
    }

    /// Validate a phone number for the given country.
    pub async fn validate_phone(&self, phone: &str, country_code: &str) -> Result<PhoneValidation> {
        let call = Call::new(Endpoint::Phone)
            .require("phone", phone)?
            .require("countryCode", country_code)?;
        self.execute(call).await
    }

    /// Validate an IBAN and look up its bank.
    pub async fn validate_iban(&self, iban: &str) -> Result<IbanValidation> {
        let call = Call::new(Endpoint::Iban).require("iban", iban)?;
        self.execute(call).await
    }

    /// Score a payment for fraud.
    ///
    /// `data` is any value serializing to a non-empty JSON object, such as a
    /// `serde_json::json!({...})` literal or a caller-defined struct.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example(client: &greip::GreipClient) -> greip::Result<()> {
    /// let fraud = client
    ///     .payment_fraud(serde_json::json!({
    ///         "customer_id": "123456",
    ///         "customer_email": "name@domain.com",
    ///         "customer_ip": "1.1.1.1",
    ///     }))
    ///     .await?;
    /// println!("score: {}", fraud.score);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// [`GreipError::MissingParameter`] for a null or empty object,
    /// [`GreipError::InvalidParameter`] for a non-object, request errors
    /// otherwise.
    pub async fn payment_fraud<D: Serialize>(&self, data: D) -> Result<PaymentFraud> {
        let data = serde_json::to_value(data).map_err(GreipError::Encode)?;
        let call = Call::new(Endpoint::PaymentFraud).body("data", data)?;
        self.execute(call).await
    }
}
