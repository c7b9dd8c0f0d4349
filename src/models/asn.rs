//! ASN model for the `ASNLookup` endpoint.

use serde::{Deserialize, Serialize};

/// Full record for an autonomous system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsnDetails {
    /// AS number as returned, e.g. `"AS13335"`.
    pub asn: String,
    pub name: String,
    #[serde(rename = "org")]
    pub organization: String,
    pub phone: String,
    pub email: String,
    pub domain: String,
    /// Registration date.
    pub created: String,
    #[serde(rename = "type")]
    pub asn_type: String,
    /// Regional registry (e.g. `"arin"`).
    pub registry: String,
    #[serde(rename = "totalIPs")]
    pub total_ips: u64,
    #[serde(rename = "IPv4")]
    pub ipv4: IpTotal,
    #[serde(rename = "IPv6")]
    pub ipv6: IpTotal,
}

/// Address count for one family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IpTotal {
    pub total: u64,
}
