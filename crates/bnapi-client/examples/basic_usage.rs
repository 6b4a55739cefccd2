//! Basic usage example for the Battle.net API gateway client
//!
//! This example demonstrates how to:
//! - Authenticate with OAuth client credentials
//! - Fetch region-namespaced Game Data endpoints
//! - Inspect the stored session
//!
//! Run with:
//! `BNET_CLIENT_ID=... BNET_CLIENT_SECRET=... cargo run --example basic_usage`

use bnapi_client::{BnapiClient, Locale, Namespace, Region};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for debug output
    tracing_subscriber::fmt::init();

    let client_id = std::env::var("BNET_CLIENT_ID")?;
    let client_secret = std::env::var("BNET_CLIENT_SECRET")?;

    // Authenticate against the EU region
    println!("Authenticating against EU...");
    let mut client = BnapiClient::new()?;
    client
        .authenticate(&client_id, &client_secret, Region::EU, Locale::EnGb)
        .await?;

    if let Some(session) = client.session() {
        println!(
            "Token acquired, expires at {:?} (expired: {})",
            session.expires_at(),
            session.is_expired()
        );
    }

    // Example 1: WoW token price (dynamic namespace)
    println!("\n1. Fetching WoW token index...");
    match client
        .get(
            "data/wow/token/index",
            &[("namespace", Namespace::Dynamic.as_str())],
        )
        .await
    {
        Ok(value) => println!("Token price: {}", value["price"]),
        Err(e) => println!("Error: {e}"),
    }

    // Example 2: achievement categories (static namespace)
    println!("\n2. Fetching achievement category index...");
    match client
        .get(
            "data/wow/achievement-category/index",
            &[("namespace", Namespace::Static.as_str())],
        )
        .await
    {
        Ok(value) => {
            if let Some(categories) = value["categories"].as_array() {
                println!("{} categories, first 3:", categories.len());
                for category in categories.iter().take(3) {
                    println!("  {} ({})", category["name"], category["id"]);
                }
            }
        }
        Err(e) => println!("Error: {e}"),
    }

    Ok(())
}
