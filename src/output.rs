//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use crate::{
    AsnDetails, CountryInfo, EmailValidation, IbanValidation, IpLookup, PaymentFraud,
    PhoneValidation, ProfanityResult, ThreatsResult,
};

/// Trait for human-readable key-value output.
///
/// Implemented by result types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

fn header(title: String) -> Vec<String> {
    let divider = "─".repeat(title.chars().count().max(30));
    vec![title, divider]
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

impl PrettyPrint for IpLookup {
    fn pretty_print(&self) -> String {
        let mut lines = header(format!("IP: {}", self.ip));
        lines.push(format!("Type:           {}", self.ip_type));

        let place = self.place();
        if !place.is_empty() {
            lines.push(format!("Location:       {}", place));
        }

        if !self.continent_name.is_empty() {
            lines.push(format!("Continent:      {}", self.continent_name));
        }

        if !self.latitude.is_empty() || !self.longitude.is_empty() {
            lines.push(format!("Coordinates:    {}, {}", self.latitude, self.longitude));
        }

        if let Some(ref asn) = self.asn {
            lines.push(format!("ASN:            {} ({})", asn.number, asn.organization));
        }

        if let Some(ref tz) = self.timezone {
            lines.push(format!("Timezone:       {} ({})", tz.name, tz.abbreviation));
        }

        if let Some(ref currency) = self.currency {
            lines.push(format!("Currency:       {} ({})", currency.name, currency.code));
        }

        if let Some(ref security) = self.security {
            lines.push(format!("Threat:         {}", yes_no(security.is_threat())));
            if !security.proxy_type.is_empty() {
                lines.push(format!("Proxy Type:     {}", security.proxy_type));
            }
        }

        if let Some(ref device) = self.device {
            lines.push(format!(
                "Device:         {} / {} / {}",
                device.device_type, device.os.title, device.browser.title
            ));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for ThreatsResult {
    fn pretty_print(&self) -> String {
        let mut lines = header(format!("Threats: {}", self.ip));
        let flags = self.threats.active_flags();
        if flags.is_empty() {
            lines.push("Flags:          none".to_string());
        } else {
            lines.push(format!("Flags:          {}", flags.join(", ")));
        }
        if !self.threats.proxy_type.is_empty() {
            lines.push(format!("Proxy Type:     {}", self.threats.proxy_type));
        }
        lines.join("\n")
    }
}

impl PrettyPrint for CountryInfo {
    fn pretty_print(&self) -> String {
        let mut lines = header(format!("Country: {} ({})", self.country_name, self.country_code));
        lines.push(format!("Capital:        {}", self.capital));
        lines.push(format!("Population:     {}", self.population));
        lines.push(format!("Continent:      {}", self.continent_name));
        lines.push(format!("EU Member:      {}", yes_no(self.country_is_eu)));

        if let Some(ref currency) = self.currency {
            lines.push(format!("Currency:       {} ({})", currency.name, currency.code));
        }

        if let Some(ref language) = self.language {
            lines.push(format!("Language:       {}", language.name));
        }

        let neighbours = self.neighbours();
        if !neighbours.is_empty() {
            lines.push(format!("Neighbours:     {}", neighbours.join(", ")));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for ProfanityResult {
    fn pretty_print(&self) -> String {
        let mut lines = header("Profanity Check".to_string());
        lines.push(format!("Safe:           {}", yes_no(self.is_safe)));
        lines.push(format!("Bad Words:      {}", self.total_bad_words));
        lines.push(format!("Risk Score:     {}", self.risk_score));
        lines.join("\n")
    }
}

impl PrettyPrint for AsnDetails {
    fn pretty_print(&self) -> String {
        let mut lines = header(format!("ASN: {}", self.asn));
        lines.push(format!("Name:           {}", self.name));
        lines.push(format!("Organization:   {}", self.organization));
        if !self.domain.is_empty() {
            lines.push(format!("Domain:         {}", self.domain));
        }
        if !self.registry.is_empty() {
            lines.push(format!("Registry:       {}", self.registry));
        }
        lines.push(format!(
            "Addresses:      {} ({} IPv4, {} IPv6)",
            self.total_ips, self.ipv4.total, self.ipv6.total
        ));
        lines.join("\n")
    }
}

impl PrettyPrint for EmailValidation {
    fn pretty_print(&self) -> String {
        let mut lines = header(format!("Email: {}", self.email));
        lines.push(format!("Valid:          {}", yes_no(self.is_valid)));
        lines.push(format!("Score:          {}", self.score));
        if !self.reason.is_empty() {
            lines.push(format!("Reason:         {}", self.reason));
        }
        lines.join("\n")
    }
}

impl PrettyPrint for PhoneValidation {
    fn pretty_print(&self) -> String {
        let mut lines = header(format!("Phone: {} ({})", self.phone, self.country_code));
        lines.push(format!("Valid:          {}", yes_no(self.is_valid)));
        if !self.carrier.is_empty() {
            lines.push(format!("Carrier:        {}", self.carrier));
        }
        if !self.reason.is_empty() {
            lines.push(format!("Reason:         {}", self.reason));
        }
        lines.join("\n")
    }
}

impl PrettyPrint for IbanValidation {
    fn pretty_print(&self) -> String {
        let title = if self.formats.human.is_empty() {
            self.iban.clone()
        } else {
            self.formats.human.clone()
        };
        let mut lines = header(format!("IBAN: {}", title));
        lines.push(format!("Valid:          {}", yes_no(self.is_valid)));
        if !self.country.name.is_empty() {
            lines.push(format!(
                "Country:        {} (SEPA: {})",
                self.country.name,
                yes_no(self.country.is_sepa)
            ));
        }
        if !self.bank.identifier.is_empty() {
            lines.push(format!("Bank:           {}", self.bank.identifier));
        }
        lines.join("\n")
    }
}

impl PrettyPrint for PaymentFraud {
    fn pretty_print(&self) -> String {
        let mut lines = header("Payment Fraud Check".to_string());
        lines.push(format!("Score:          {}", self.score));
        lines.push(format!(
            "Rules:          {} detected / {} checked",
            self.rules_detected, self.rules_checked
        ));
        for rule in &self.rules {
            lines.push(format!("  - {}: {}", rule.id, rule.description));
        }
        lines.join("\n")
    }
}
