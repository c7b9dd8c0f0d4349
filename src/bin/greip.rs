//! Greip API CLI binary.
//!
//! A command-line interface for interacting with the Greip API.

use std::collections::HashMap;
use std::process::ExitCode;

use clap::Parser;
use greip::cli::{Cli, Command};
use greip::{GreipClient, GreipError, IpLookup, PrettyPrint};
use serde::Serialize;
use tabled::{Table, Tabled};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = match GreipClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Set GREIP_API_KEY environment variable");
            return ExitCode::FAILURE;
        }
    };
    let test_mode = cli.test || client.is_test_mode();
    let client = client.with_test_mode(test_mode);

    match run(&client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &GreipClient, cli: Cli) -> greip::Result<()> {
    let json = cli.json;
    match cli.command {
        Command::Lookup { ip, params, lang } => {
            let params = as_strs(&params);
            let lookup = client.ip_lookup(&ip, &params, lang.as_deref()).await?;
            output_single(&lookup, json)
        }
        Command::Bulk { ips, params, lang } => {
            let ips = as_strs(&ips);
            let params = as_strs(&params);
            let results = client.bulk_lookup(&ips, &params, lang.as_deref()).await?;
            output_bulk(&results, json)
        }
        Command::Threats { ip } => output_single(&client.threats(&ip).await?, json),
        Command::Country { code, params, lang } => {
            let params = as_strs(&params);
            let country = client.country(&code, &params, lang.as_deref()).await?;
            output_single(&country, json)
        }
        Command::Profanity { text } => output_single(&client.profanity(&text).await?, json),
        Command::Asn { asn } => output_single(&client.asn_lookup(&asn).await?, json),
        Command::Email { email } => output_single(&client.validate_email(&email).await?, json),
        Command::Phone {
            phone,
            country_code,
        } => output_single(&client.validate_phone(&phone, &country_code).await?, json),
        Command::Iban { iban } => output_single(&client.validate_iban(&iban).await?, json),
        Command::Payment { data } => {
            let data: serde_json::Value = serde_json::from_str(&data).map_err(|e| {
                GreipError::InvalidParameter(format!("data: not valid JSON ({e})"))
            })?;
            output_single(&client.payment_fraud(data).await?, json)
        }
    }
}

fn as_strs(values: &[String]) -> Vec<&str> {
    values.iter().map(String::as_str).collect()
}

fn output_single<T: Serialize + PrettyPrint>(item: &T, json: bool) -> greip::Result<()> {
    if json {
        println!("{}", to_pretty_json(item)?);
    } else {
        println!("{}", item.pretty_print());
    }
    Ok(())
}

fn output_bulk(results: &HashMap<String, IpLookup>, json: bool) -> greip::Result<()> {
    if json {
        println!("{}", to_pretty_json(results)?);
    } else {
        let mut rows: Vec<LookupRow> = results.values().map(LookupRow::from).collect();
        rows.sort_by(|a, b| a.ip.cmp(&b.ip));
        println!("{}", Table::new(rows));
        println!("\n{} addresses", results.len());
    }
    Ok(())
}

fn to_pretty_json<T: Serialize + ?Sized>(item: &T) -> greip::Result<String> {
    serde_json::to_string_pretty(item).map_err(GreipError::Encode)
}

// Table row type for non-JSON bulk output

#[derive(Tabled)]
struct LookupRow {
    ip: String,
    country: String,
    city: String,
    asn: String,
    threat: String,
}

impl From<&IpLookup> for LookupRow {
    fn from(l: &IpLookup) -> Self {
        Self {
            ip: l.ip.clone(),
            country: l.country_code.clone(),
            city: l.city.clone(),
            asn: l.asn.as_ref().map(|a| a.number.clone()).unwrap_or_default(),
            threat: match l.security {
                Some(ref s) if s.is_threat() => "yes".to_string(),
                Some(_) => "no".to_string(),
                None => String::new(),
            },
        }
    }
}
