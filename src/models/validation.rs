//! Email, phone and IBAN validation models.

use serde::{Deserialize, Serialize};

/// Result of the `validateEmail` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailValidation {
    #[serde(default)]
    pub email: String,
    pub is_valid: bool,
    /// Risk score, higher is riskier.
    #[serde(default)]
    pub score: u32,
    /// Why the address was judged invalid or risky.
    #[serde(default)]
    pub reason: String,
}

/// Result of the `validatePhone` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneValidation {
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub country_code: String,
    pub is_valid: bool,
    #[serde(default)]
    pub carrier: String,
    #[serde(default)]
    pub reason: String,
}

/// Result of the `validateIBAN` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IbanValidation {
    pub is_valid: bool,
    #[serde(default)]
    pub iban: String,
    #[serde(default)]
    pub formats: IbanFormats,
    #[serde(default)]
    pub country: IbanCountry,
    #[serde(default)]
    pub bank: IbanBank,
}

/// The IBAN rendered for machines, humans and logs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IbanFormats {
    pub machine: String,
    pub human: String,
    pub obfuscated: String,
}

/// IBAN registry data for the issuing country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IbanCountry {
    pub name: String,
    #[serde(rename = "IANA")]
    pub iana: String,
    #[serde(rename = "ISO3166")]
    pub iso3166: String,
    pub currency: String,
    #[serde(rename = "centralBank")]
    pub central_bank: CentralBank,
    pub membership: String,
    #[serde(rename = "isEU")]
    pub is_eu: bool,
    pub length: String,
    #[serde(rename = "example_iban")]
    pub sample_iban: String,
    #[serde(rename = "isSEPA")]
    pub is_sepa: bool,
    #[serde(rename = "swiftOfficial")]
    pub swift_official: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CentralBank {
    pub name: String,
    pub url: String,
}

/// The account-holding bank, as far as the BBAN identifies it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IbanBank {
    pub identifier: String,
    pub name: String,
    pub short_name: String,
    pub branch_code: String,
    pub bban: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_deserialize() {
        let json = r#"{"score": 0, "reason": "", "isValid": true, "email": "name@domain.com"}"#;
        let email: EmailValidation = serde_json::from_str(json).expect("Failed to deserialize");
        assert!(email.is_valid);
        assert_eq!(email.email, "name@domain.com");
    }

    #[test]
    fn test_phone_deserialize() {
        let json = r#"{"carrier": "KPN", "reason": "", "isValid": true,
                       "phone": "+31612345678", "countryCode": "NL"}"#;
        let phone: PhoneValidation = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(phone.carrier, "KPN");
        assert_eq!(phone.country_code, "NL");
    }

    #[test]
    fn test_iban_deserialize() {
        let json = r#"{
            "isValid": true,
            "iban": "GB82WEST12345698765432",
            "formats": {"machine": "GB82WEST12345698765432",
                        "human": "GB82 WEST 1234 5698 7654 32",
                        "obfuscated": "GB** **** **** **** **54 32"},
            "country": {"name": "United Kingdom", "IANA": ".uk", "ISO3166": "GB",
                        "currency": "GBP",
                        "centralBank": {"name": "Bank of England", "url": "https://www.bankofengland.co.uk"},
                        "membership": "non-eu", "isEU": false, "length": "22",
                        "example_iban": "GB29NWBK60161331926819",
                        "isSEPA": true, "swiftOfficial": true},
            "bank": {"identifier": "WEST", "name": "", "short_name": "",
                     "branch_code": "123456", "bban": "WEST12345698765432"}
        }"#;
        let iban: IbanValidation = serde_json::from_str(json).expect("Failed to deserialize");
        assert!(iban.is_valid);
        assert_eq!(iban.formats.human, "GB82 WEST 1234 5698 7654 32");
        assert_eq!(iban.country.central_bank.name, "Bank of England");
        assert_eq!(iban.country.sample_iban, "GB29NWBK60161331926819");
        assert!(iban.country.is_sepa);
        assert_eq!(iban.bank.branch_code, "123456");
    }
}
