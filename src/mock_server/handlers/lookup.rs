//! IP, country and ASN endpoint handlers.

use std::collections::HashMap;
use std::net::IpAddr;

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::Response,
};

use super::{admit, failure, required, requested_sections, success, SharedState};
use crate::mock_server::state::MockState;
use crate::{CountryInfo, IpLookup, ProfanityResult, Threats, ThreatsResult};

/// Result for `ip`: the stored fixture, or a bare record for any other
/// well-formed address.
fn resolve_lookup(state: &MockState, ip: &str) -> Option<IpLookup> {
    if let Some(lookup) = state.get_lookup(ip) {
        return Some(lookup.clone());
    }
    let addr: IpAddr = ip.parse().ok()?;
    Some(IpLookup {
        ip: ip.to_string(),
        ip_type: if addr.is_ipv6() { "IPv6" } else { "IPv4" }.to_string(),
        ..Default::default()
    })
}

/// Drop the optional sections that were not requested.
fn filter_lookup(mut lookup: IpLookup, sections: &[&str]) -> IpLookup {
    if !sections.contains(&"location") {
        lookup.location = None;
    }
    if !sections.contains(&"security") {
        lookup.security = None;
    }
    if !sections.contains(&"timezone") {
        lookup.timezone = None;
    }
    if !sections.contains(&"currency") {
        lookup.currency = None;
    }
    if !sections.contains(&"device") {
        lookup.device = None;
    }
    lookup
}

fn filter_country(mut country: CountryInfo, sections: &[&str]) -> CountryInfo {
    if !sections.contains(&"language") {
        country.language = None;
    }
    if !sections.contains(&"flag") {
        country.flag = None;
    }
    if !sections.contains(&"currency") {
        country.currency = None;
    }
    if !sections.contains(&"timezone") {
        country.timezone = None;
    }
    country
}

/// GET /IPLookup
pub async fn ip_lookup(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    if let Some(rejection) = admit(&state, "IPLookup", &headers, &query, None).await {
        return rejection;
    }

    let Some(ip) = required(&query, "ip") else {
        return failure("you must provide the `ip` parameter");
    };

    let state = state.read().await;
    match resolve_lookup(&state, ip) {
        Some(lookup) => success(filter_lookup(lookup, &requested_sections(&query))),
        None => failure(&format!("Invalid IP address: {ip}")),
    }
}

/// GET /BulkLookup
pub async fn bulk_lookup(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    if let Some(rejection) = admit(&state, "BulkLookup", &headers, &query, None).await {
        return rejection;
    }

    let Some(ips) = required(&query, "ips") else {
        return failure("you must provide the `ips` parameter");
    };

    let sections = requested_sections(&query);
    let state = state.read().await;
    let mut results = HashMap::new();
    for ip in ips.split(',') {
        match resolve_lookup(&state, ip) {
            Some(lookup) => {
                results.insert(ip.to_string(), filter_lookup(lookup, &sections));
            }
            None => return failure(&format!("Invalid IP address: {ip}")),
        }
    }
    success(results)
}

/// GET /threats
pub async fn threats(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    if let Some(rejection) = admit(&state, "threats", &headers, &query, None).await {
        return rejection;
    }

    let Some(ip) = required(&query, "ip") else {
        return failure("you must provide the `ip` parameter");
    };

    let state = state.read().await;
    let Some(lookup) = resolve_lookup(&state, ip) else {
        return failure(&format!("Invalid IP address: {ip}"));
    };

    let threats = lookup
        .security
        .map(|s| Threats {
            is_proxy: s.is_proxy,
            proxy_type: s.proxy_type,
            is_tor: s.is_tor,
            is_bot: s.is_bot,
            is_relay: s.is_relay,
            is_hosting: s.is_hosting,
        })
        .unwrap_or_default();

    success(ThreatsResult {
        ip: lookup.ip,
        threats,
    })
}

/// GET /Country
pub async fn country(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    if let Some(rejection) = admit(&state, "Country", &headers, &query, None).await {
        return rejection;
    }

    let Some(code) = required(&query, "CountryCode") else {
        return failure("you must provide the `CountryCode` parameter");
    };

    let state = state.read().await;
    match state.get_country(code) {
        Some(country) => success(filter_country(country.clone(), &requested_sections(&query))),
        None => failure(&format!("Invalid country code: {code}")),
    }
}

/// GET /ASNLookup
pub async fn asn_lookup(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    if let Some(rejection) = admit(&state, "ASNLookup", &headers, &query, None).await {
        return rejection;
    }

    let Some(asn) = required(&query, "asn") else {
        return failure("you must provide the `asn` parameter");
    };

    let state = state.read().await;
    match state.get_asn(asn) {
        Some(record) => success(record.clone()),
        None => failure(&format!("Unknown ASN: {asn}")),
    }
}

/// GET /badWords
pub async fn bad_words(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    if let Some(rejection) = admit(&state, "badWords", &headers, &query, None).await {
        return rejection;
    }

    let Some(text) = required(&query, "text") else {
        return failure("you must provide the `text` parameter");
    };

    let state = state.read().await;
    let total = state.count_bad_words(text);
    success(ProfanityResult {
        text: text.to_string(),
        total_bad_words: total,
        risk_score: total.saturating_mul(25).min(100),
        is_safe: total == 0,
    })
}
