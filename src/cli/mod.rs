//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the greip binary.

use clap::{Parser, Subcommand};

/// Greip API command-line interface.
#[derive(Parser, Debug)]
#[command(name = "greip", about = "Greip API CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a summary.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Send requests in test mode (no credits are used, data is canned).
    #[arg(long, global = true, default_value = "false")]
    pub test: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Geolocate an IP address.
    Lookup {
        /// IPv4 or IPv6 address.
        ip: String,

        /// Extra sections: location, security, timezone, currency, device.
        #[arg(long, value_delimiter = ',')]
        params: Vec<String>,

        /// Response language (EN, AR, DE, FR, ES, JA, ZH, RU).
        #[arg(long)]
        lang: Option<String>,
    },

    /// Geolocate several IP addresses at once.
    Bulk {
        /// IPv4 or IPv6 addresses.
        #[arg(required = true)]
        ips: Vec<String>,

        /// Extra sections: location, security, timezone, currency, device.
        #[arg(long, value_delimiter = ',')]
        params: Vec<String>,

        /// Response language.
        #[arg(long)]
        lang: Option<String>,
    },

    /// Check an IP address against threat intelligence.
    Threats {
        /// IPv4 or IPv6 address.
        ip: String,
    },

    /// Show country metadata.
    Country {
        /// ISO 3166-1 alpha-2 country code.
        code: String,

        /// Extra sections: language, flag, currency, timezone.
        #[arg(long, value_delimiter = ',')]
        params: Vec<String>,

        /// Response language.
        #[arg(long)]
        lang: Option<String>,
    },

    /// Check a text for profanity.
    Profanity {
        /// The text to check.
        text: String,
    },

    /// Look up an autonomous system.
    Asn {
        /// AS number, e.g. AS13335.
        asn: String,
    },

    /// Validate an email address.
    Email {
        /// The address to validate.
        email: String,
    },

    /// Validate a phone number.
    Phone {
        /// The phone number to validate.
        phone: String,

        /// ISO 3166-1 alpha-2 country code of the number.
        country_code: String,
    },

    /// Validate an IBAN.
    Iban {
        /// The IBAN to validate.
        iban: String,
    },

    /// Score a payment for fraud.
    Payment {
        /// Payment data as a JSON object.
        data: String,
    },
}
