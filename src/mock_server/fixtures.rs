//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use crate::{
    Asn, AsnDetails, CountryInfo, Currency, Flag, IpLookup, IpTotal, Language, Location,
    Security, Timezone,
};

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    // =========================================================================
    // IP Lookup Fixtures
    // =========================================================================

    /// Create a lookup with the core geolocation fields only.
    pub fn minimal_lookup(ip: &str, country_code: &str, country_name: &str) -> IpLookup {
        IpLookup {
            ip: ip.to_string(),
            ip_type: if ip.contains(':') { "IPv6" } else { "IPv4" }.to_string(),
            country_code: country_code.to_string(),
            country_name: country_name.to_string(),
            ..Default::default()
        }
    }

    /// Create a lookup with every optional section filled in.
    pub fn full_lookup(
        ip: &str,
        country_code: &str,
        country_name: &str,
        city: &str,
        asn: &str,
        org: &str,
    ) -> IpLookup {
        let mut lookup = Self::minimal_lookup(ip, country_code, country_name);
        lookup.city = city.to_string();
        lookup.location = Some(Location {
            capital: city.to_string(),
            phone_code: "1".to_string(),
            ..Default::default()
        });
        lookup.asn = Some(Asn {
            number: asn.to_string(),
            name: org.to_uppercase(),
            organization: org.to_string(),
            asn_type: "hosting".to_string(),
            ..Default::default()
        });
        lookup.timezone = Some(Self::utc_timezone());
        lookup.security = Some(Security::default());
        lookup
    }

    /// Create a lookup for a Tor exit node.
    pub fn tor_exit_lookup(ip: &str) -> IpLookup {
        let mut lookup = Self::minimal_lookup(ip, "DE", "Germany");
        lookup.security = Some(Security {
            is_proxy: true,
            proxy_type: "TOR".to_string(),
            is_tor: true,
            ..Default::default()
        });
        lookup
    }

    fn utc_timezone() -> Timezone {
        Timezone {
            name: "UTC".to_string(),
            abbreviation: "UTC".to_string(),
            ..Default::default()
        }
    }

    // =========================================================================
    // Country Fixtures
    // =========================================================================

    /// Create a country with currency and language sections.
    pub fn country(code: &str, name: &str, capital: &str, currency_code: &str) -> CountryInfo {
        CountryInfo {
            country_name: name.to_string(),
            country_code: code.to_string(),
            capital: capital.to_string(),
            language: Some(Language {
                name: "English".to_string(),
                code: "en".to_string(),
                native_name: "English".to_string(),
            }),
            flag: Some(Flag {
                svg: format!("https://flags.example/{}.svg", code.to_lowercase()),
                ..Default::default()
            }),
            currency: Some(Currency {
                name: currency_code.to_string(),
                code: currency_code.to_string(),
                symbol: String::new(),
            }),
            timezone: Some(Self::utc_timezone()),
            ..Default::default()
        }
    }

    // =========================================================================
    // ASN Fixtures
    // =========================================================================

    /// Create an AS record.
    pub fn asn(asn: &str, org: &str, ipv4_total: u64) -> AsnDetails {
        AsnDetails {
            asn: asn.to_string(),
            name: org.to_uppercase(),
            organization: org.to_string(),
            asn_type: "isp".to_string(),
            registry: "arin".to_string(),
            total_ips: ipv4_total,
            ipv4: IpTotal { total: ipv4_total },
            ..Default::default()
        }
    }

    // =========================================================================
    // Scenarios
    // =========================================================================

    /// A small but complete data set covering every endpoint.
    pub fn default_scenario() -> DefaultScenario {
        DefaultScenario {
            lookups: vec![
                Self::full_lookup(
                    "1.1.1.1",
                    "AU",
                    "Australia",
                    "Sydney",
                    "AS13335",
                    "Cloudflare, Inc.",
                ),
                Self::full_lookup(
                    "8.8.8.8",
                    "US",
                    "United States",
                    "Mountain View",
                    "AS15169",
                    "Google LLC",
                ),
                Self::tor_exit_lookup("185.220.101.1"),
            ],
            countries: vec![
                Self::country("NL", "Netherlands", "Amsterdam", "EUR"),
                Self::country("US", "United States", "Washington", "USD"),
            ],
            asns: vec![
                Self::asn("AS13335", "Cloudflare, Inc.", 1_524_736),
                Self::asn("AS15169", "Google LLC", 8_698_880),
            ],
            bad_words: vec!["darn".to_string(), "heck".to_string()],
        }
    }
}

/// Default test scenario with common data.
pub struct DefaultScenario {
    pub lookups: Vec<IpLookup>,
    pub countries: Vec<CountryInfo>,
    pub asns: Vec<AsnDetails>,
    pub bad_words: Vec<String>,
}
