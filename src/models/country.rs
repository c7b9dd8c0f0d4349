//! Country model for the `Country` endpoint.

use serde::{Deserialize, Serialize};

use super::lookup::{Flag, Language, Timezone};

/// Country metadata.
///
/// `language`, `flag`, `currency` and `timezone` are only populated when
/// requested through `params`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryInfo {
    pub country_name: String,

    /// ISO 3166-1 alpha-2 code.
    pub country_code: String,

    #[serde(rename = "countryGeoNameID", default)]
    pub country_geoname_id: u64,

    #[serde(default)]
    pub capital: String,

    #[serde(default)]
    pub population: u64,

    #[serde(default)]
    pub language: Option<Language>,

    #[serde(default)]
    pub flag: Option<Flag>,

    #[serde(default)]
    pub phone_code: String,

    #[serde(default)]
    pub currency: Option<Currency>,

    #[serde(rename = "countryIsEU", default)]
    pub country_is_eu: bool,

    /// Comma-separated neighbour country codes.
    #[serde(default)]
    pub country_neighbours: String,

    #[serde(default)]
    pub tld: String,

    #[serde(default)]
    pub timezone: Option<Timezone>,

    #[serde(default)]
    pub continent_name: String,

    #[serde(default)]
    pub continent_code: String,

    #[serde(rename = "continentGeoNameID", default)]
    pub continent_geoname_id: u64,
}

impl CountryInfo {
    /// Neighbour country codes as a list.
    pub fn neighbours(&self) -> Vec<&str> {
        self.country_neighbours
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .collect()
    }
}

/// National currency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Currency {
    #[serde(rename = "currencyName")]
    pub name: String,
    #[serde(rename = "currencyCode")]
    pub code: String,
    #[serde(rename = "currencySymbol")]
    pub symbol: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_deserialize() {
        let json = r#"{
            "countryName": "Netherlands",
            "countryCode": "NL",
            "countryGeoNameID": 2750405,
            "capital": "Amsterdam",
            "population": 17441139,
            "phoneCode": "31",
            "currency": {"currencyName": "Euro", "currencyCode": "EUR", "currencySymbol": "€"},
            "countryIsEU": true,
            "countryNeighbours": "BE,DE",
            "tld": ".nl",
            "continentName": "Europe",
            "continentCode": "EU",
            "continentGeoNameID": 6255148
        }"#;
        let country: CountryInfo = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(country.country_code, "NL");
        assert!(country.country_is_eu);
        assert_eq!(country.currency.as_ref().unwrap().code, "EUR");
        assert_eq!(country.neighbours(), vec!["BE", "DE"]);
        assert!(country.flag.is_none());
        assert!(country.timezone.is_none());
    }

    #[test]
    fn test_no_neighbours() {
        let country = CountryInfo {
            country_code: "AU".into(),
            ..Default::default()
        };
        assert!(country.neighbours().is_empty());
    }
}
