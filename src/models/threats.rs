//! Threat intelligence model for the `threats` endpoint.

use serde::{Deserialize, Serialize};

/// Threat classification of a single IP address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreatsResult {
    /// The IP address that was checked.
    pub ip: String,

    /// The classification flags.
    #[serde(default)]
    pub threats: Threats,
}

/// Threat flags. Same fields as the lookup's security section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Threats {
    pub is_proxy: bool,
    /// Proxy flavour (e.g. `"VPN"`, `"TOR"`), empty when not a proxy.
    pub proxy_type: String,
    pub is_tor: bool,
    pub is_bot: bool,
    pub is_relay: bool,
    pub is_hosting: bool,
}

impl Threats {
    /// Returns true if any flag is set.
    pub fn is_threat(&self) -> bool {
        self.is_proxy || self.is_tor || self.is_bot || self.is_relay || self.is_hosting
    }

    /// Names of the flags that are set.
    pub fn active_flags(&self) -> Vec<&'static str> {
        [
            (self.is_proxy, "proxy"),
            (self.is_tor, "tor"),
            (self.is_bot, "bot"),
            (self.is_relay, "relay"),
            (self.is_hosting, "hosting"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect()
    }
}
