//! IP lookup model.
//!
//! Returned by the `IPLookup` endpoint and, keyed by IP, by `BulkLookup`.
//! Sections other than the core geolocation are only present when requested
//! through `params`.

use serde::{Deserialize, Serialize};

use super::country::Currency;

/// Geolocation and enrichment data for one IP address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpLookup {
    /// The IP address that was looked up.
    pub ip: String,

    /// Address family, `"IPv4"`/`"IPv6"` (the upstream also uses `v4`/`v6`).
    #[serde(default)]
    pub ip_type: String,

    /// Numeric form of the address. IPv6 numbers exceed `u64`.
    #[serde(rename = "IPNumber", default)]
    pub ip_number: Option<serde_json::Number>,

    #[serde(default)]
    pub continent_name: String,

    #[serde(default)]
    pub continent_code: String,

    #[serde(rename = "continentGeoNameID", default)]
    pub continent_geoname_id: u64,

    #[serde(default)]
    pub country_name: String,

    /// ISO 3166-1 alpha-2 country code.
    #[serde(default)]
    pub country_code: String,

    #[serde(rename = "countryGeoNameID", default)]
    pub country_geoname_id: u64,

    #[serde(rename = "regionName", default)]
    pub region: String,

    #[serde(rename = "cityName", default)]
    pub city: String,

    #[serde(default)]
    pub zip_code: String,

    #[serde(default)]
    pub latitude: String,

    #[serde(default)]
    pub longitude: String,

    /// Country details (`location` param).
    #[serde(default)]
    pub location: Option<Location>,

    /// Owning network.
    #[serde(default)]
    pub asn: Option<Asn>,

    /// Local time information (`timezone` param).
    #[serde(default)]
    pub timezone: Option<Timezone>,

    /// National currency of the address's country (`currency` param).
    #[serde(default)]
    pub currency: Option<Currency>,

    /// Proxy/VPN/Tor flags (`security` param).
    #[serde(default)]
    pub security: Option<Security>,

    /// Requesting device details (`device` param).
    #[serde(default)]
    pub device: Option<Device>,
}

impl IpLookup {
    /// Returns true if the looked-up address is IPv6.
    pub fn is_v6(&self) -> bool {
        self.ip_type.eq_ignore_ascii_case("ipv6") || self.ip_type.eq_ignore_ascii_case("v6")
    }

    /// "City, Region, Country" with empty parts skipped.
    pub fn place(&self) -> String {
        [&self.city, &self.region, &self.country_name]
            .iter()
            .filter(|part| !part.is_empty())
            .map(|part| part.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Returns true if the security section flags the address.
    pub fn is_threat(&self) -> bool {
        self.security.as_ref().is_some_and(Security::is_threat)
    }
}

/// Country-level details attached to an IP lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Location {
    pub capital: String,
    pub population: u64,
    pub language: Language,
    pub flag: Flag,
    pub phone_code: String,
    #[serde(rename = "countryIsEU")]
    pub country_is_eu: bool,
    pub country_neighbours: String,
    pub tld: String,
}

/// Primary language of a country.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    pub name: String,
    pub code: String,
    #[serde(rename = "native")]
    pub native_name: String,
}

/// Country flag in several encodings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Flag {
    pub emoji: String,
    pub unicode: String,
    pub png: FlagPng,
    pub svg: String,
}

/// PNG flag URLs by width.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlagPng {
    #[serde(rename = "1000px")]
    pub large: String,
    #[serde(rename = "250px")]
    pub medium: String,
    #[serde(rename = "100px")]
    pub small: String,
}

/// Autonomous system summary attached to an IP lookup.
///
/// See [`AsnDetails`](crate::AsnDetails) for the full `ASNLookup` record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Asn {
    #[serde(rename = "asn")]
    pub number: String,
    pub name: String,
    #[serde(rename = "org")]
    pub organization: String,
    pub phone: String,
    pub email: String,
    pub domain: String,
    pub created: String,
    #[serde(rename = "type")]
    pub asn_type: String,
}

/// Timezone and local solar data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Timezone {
    /// IANA name, e.g. `"Europe/Amsterdam"`.
    pub name: String,
    pub abbreviation: String,
    /// UTC offset in seconds.
    pub offset: i64,
    pub current_time: String,
    #[serde(rename = "currentTimestamp")]
    pub current_timestamp: i64,
    #[serde(rename = "isDST")]
    pub is_dst: bool,
    #[serde(rename = "sunInfo")]
    pub sun: SunInfo,
}

/// Sunrise, sunset and twilight times for the location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SunInfo {
    pub sunset: String,
    pub sunrise: String,
    pub transit: String,
    pub civil_twilight_begin: String,
    pub civil_twilight_end: String,
    pub nautical_twilight_begin: String,
    pub nautical_twilight_end: String,
    pub astronomical_twilight_begin: String,
    pub astronomical_twilight_end: String,
    pub day_length: String,
}

/// Anonymization and hosting flags for an address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Security {
    pub is_proxy: bool,
    pub proxy_type: String,
    pub is_tor: bool,
    pub is_bot: bool,
    pub is_relay: bool,
    pub is_hosting: bool,
}

impl Security {
    /// Returns true if any flag is set.
    pub fn is_threat(&self) -> bool {
        self.is_proxy || self.is_tor || self.is_bot || self.is_relay || self.is_hosting
    }
}

/// The device that issued the request being looked up.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Device {
    pub is_mobile: bool,
    #[serde(rename = "type")]
    pub device_type: String,
    #[serde(rename = "OS")]
    pub os: OperatingSystem,
    pub browser: Browser,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperatingSystem {
    #[serde(rename = "type")]
    pub os_type: String,
    pub name: String,
    pub family: String,
    pub version: String,
    pub title: String,
    #[serde(rename = "64bits_mode")]
    pub bits_64_mode: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Browser {
    pub name: String,
    pub version: String,
    pub version_major: String,
    pub title: String,
    pub user_agent: String,
}
