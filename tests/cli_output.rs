//! Output formatting tests for the CLI.
//!
//! `--json` prints the decoded model back as JSON; the default is the
//! `PrettyPrint` summary.

use greip::{
    AsnDetails, CountryInfo, IbanValidation, IpLookup, PaymentFraud, PrettyPrint, ThreatsResult,
};

#[test]
fn test_json_output_keeps_upstream_field_names() {
    let lookup = make_test_lookup();
    let json = serde_json::to_value(&lookup).unwrap();

    assert_eq!(json["ip"], "1.1.1.1");
    assert_eq!(json["countryCode"], "AU");
    assert_eq!(json["security"]["isTor"], false);
}

#[test]
fn test_lookup_pretty_print_shows_key_fields() {
    let output = make_test_lookup().pretty_print();

    assert!(output.contains("IP: 1.1.1.1"), "Should show the address");
    assert!(output.contains("Australia"), "Should show the country");
    assert!(output.contains("AS13335"), "Should show the ASN");
    assert!(output.contains("Threat:         no"), "Should show threat status");
}

#[test]
fn test_lookup_pretty_print_omits_missing_sections() {
    let lookup: IpLookup = serde_json::from_value(serde_json::json!({
        "ip": "9.9.9.9",
        "ipType": "IPv4"
    }))
    .unwrap();
    let output = lookup.pretty_print();

    assert!(!output.contains("ASN:"));
    assert!(!output.contains("Timezone:"));
    assert!(!output.contains("Threat:"));
}

#[test]
fn test_threats_pretty_print_lists_flags() {
    let result: ThreatsResult = serde_json::from_value(serde_json::json!({
        "ip": "185.220.101.1",
        "threats": {"isProxy": true, "proxyType": "TOR", "isTor": true}
    }))
    .unwrap();
    let output = result.pretty_print();

    assert!(output.contains("tor"), "Should list the tor flag");
    assert!(output.contains("TOR"), "Should show the proxy type");
}

#[test]
fn test_country_pretty_print_shows_currency() {
    let country: CountryInfo = serde_json::from_value(serde_json::json!({
        "countryName": "Netherlands",
        "countryCode": "NL",
        "capital": "Amsterdam",
        "currency": {"currencyName": "Euro", "currencyCode": "EUR", "currencySymbol": "€"}
    }))
    .unwrap();
    let output = country.pretty_print();

    assert!(output.contains("Country: Netherlands (NL)"));
    assert!(output.contains("Euro (EUR)"));
}

#[test]
fn test_asn_pretty_print_shows_address_totals() {
    let asn: AsnDetails = serde_json::from_value(serde_json::json!({
        "asn": "AS13335",
        "name": "CLOUDFLARENET",
        "org": "Cloudflare, Inc.",
        "totalIPs": 1000,
        "IPv4": {"total": 900},
        "IPv6": {"total": 100}
    }))
    .unwrap();
    let output = asn.pretty_print();

    assert!(output.contains("Cloudflare, Inc."));
    assert!(output.contains("1000 (900 IPv4, 100 IPv6)"));
}

#[test]
fn test_iban_pretty_print_prefers_human_format() {
    let iban: IbanValidation = serde_json::from_value(serde_json::json!({
        "isValid": true,
        "iban": "GB82WEST12345698765432",
        "formats": {"human": "GB82 WEST 1234 5698 7654 32"}
    }))
    .unwrap();
    let output = iban.pretty_print();

    assert!(output.contains("IBAN: GB82 WEST 1234 5698 7654 32"));
    assert!(output.contains("Valid:          yes"));
}

#[test]
fn test_payment_pretty_print_lists_rules() {
    let fraud: PaymentFraud = serde_json::from_value(serde_json::json!({
        "score": 50,
        "rulesChecked": 3,
        "rulesDetected": 1,
        "rules": [{"id": "PF1001", "description": "Customer IP is flagged"}]
    }))
    .unwrap();
    let output = fraud.pretty_print();

    assert!(output.contains("1 detected / 3 checked"));
    assert!(output.contains("PF1001: Customer IP is flagged"));
}

// ============================================================================
// Test Helpers
// ============================================================================

fn make_test_lookup() -> IpLookup {
    serde_json::from_value(serde_json::json!({
        "ip": "1.1.1.1",
        "ipType": "IPv4",
        "continentName": "Oceania",
        "countryName": "Australia",
        "countryCode": "AU",
        "regionName": "Queensland",
        "cityName": "South Brisbane",
        "asn": {"asn": "AS13335", "org": "Cloudflare, Inc."},
        "security": {"isProxy": false, "isTor": false, "isBot": false}
    }))
    .unwrap()
}
