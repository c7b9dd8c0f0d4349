//! Basic example demonstrating the Greip API client.
//!
//! Run with:
//! ```
//! GREIP_API_KEY=your-key GREIP_TEST_MODE=1 cargo run --example basic
//! ```

use greip::GreipClient;

#[tokio::main]
async fn main() -> greip::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create client from environment variables
    println!("Creating Greip client...");
    let client = GreipClient::from_env()?;
    println!(
        "Connected to: {} (test mode: {})",
        client.base_url(),
        client.is_test_mode()
    );

    // Geolocate a single address with extra sections
    println!("\n--- IP Lookup ---");
    let lookup = client
        .ip_lookup("1.1.1.1", &["security", "timezone"], Some("EN"))
        .await?;
    println!("{} ({}) is in {}", lookup.ip, lookup.ip_type, lookup.place());
    if let Some(ref tz) = lookup.timezone {
        println!("  Timezone: {} (DST: {})", tz.name, tz.is_dst);
    }
    println!("  Threat: {}", lookup.is_threat());

    // Bulk lookup
    println!("\n--- Bulk Lookup ---");
    let results = client
        .bulk_lookup(&["1.1.1.1", "8.8.8.8"], &[], None)
        .await?;
    for (ip, result) in &results {
        println!("  - {} -> {}", ip, result.country_code);
    }

    // Threat intelligence
    println!("\n--- Threats ---");
    let threats = client.threats("185.220.101.1").await?;
    println!("  Flags: {:?}", threats.threats.active_flags());

    // Country and ASN data
    println!("\n--- Country ---");
    let country = client.country("NL", &["currency"], None).await?;
    println!(
        "  {} ({}), capital {}",
        country.country_name, country.country_code, country.capital
    );

    println!("\n--- ASN ---");
    let asn = client.asn_lookup("AS13335").await?;
    println!("  {} - {} ({} IPs)", asn.asn, asn.organization, asn.total_ips);

    // Validation endpoints
    println!("\n--- Validation ---");
    let email = client.validate_email("name@domain.com").await?;
    println!("  Email valid: {}", email.is_valid);
    let phone = client.validate_phone("+31612345678", "NL").await?;
    println!("  Phone valid: {}", phone.is_valid);
    let iban = client.validate_iban("GB82WEST12345698765432").await?;
    println!("  IBAN valid: {}", iban.is_valid);

    // Payment fraud scoring
    println!("\n--- Payment Fraud ---");
    let fraud = client
        .payment_fraud(serde_json::json!({
            "action": "purchase",
            "customer_id": "123456",
            "customer_email": "name@domain.com",
            "customer_ip": "1.1.1.1",
        }))
        .await?;
    println!("  Score: {} ({} rules hit)", fraud.score, fraud.rules_detected);

    println!("\nDone!");
    Ok(())
}
