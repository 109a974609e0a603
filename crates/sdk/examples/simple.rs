//! Simple SDK Example
//!
//! Demonstrates basic usage of the Waitline SDK.
//!
//! # Usage
//!
//! 1. Start the daemon:
//!    ```bash
//!    cargo run --package waitline-daemon
//!    ```
//!
//! 2. Run this example:
//!    ```bash
//!    cargo run --example simple
//!    ```

use waitline_sdk::{JoinRequest, WaitlineClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Waitline SDK - Simple Example");
    println!("==============================\n");

    // 1. Connect to daemon
    println!("1. Connecting to daemon...");
    let client = WaitlineClient::connect("http://127.0.0.1:9641")?;
    println!("   ✓ Connected\n");

    // 2. Join the queue
    println!("2. Joining the queue...");
    let joined = client
        .join(JoinRequest {
            name: "Ana".to_string(),
            service_type: "N".to_string(),
            entry_date: None,
        })
        .await?;
    println!("   ✓ Joined at position {}\n", joined.position);

    // 3. Show the line
    println!("3. Listing the queue...");
    let listing = client.list().await?;
    for entry in &listing.queue {
        println!(
            "   {} | {} (arrived {})",
            entry.position, entry.name, entry.entry_date
        );
    }
    println!();

    // 4. Serve the front of the line
    println!("4. Serving the front of the line...");
    let served = client.advance().await?;
    println!("   ✓ Advanced: {}\n", served.advanced);

    // 5. The served client is still addressable by their old position
    println!("5. Looking up position 1...");
    match client.get(1).await {
        Ok(found) => println!("   ✓ Position 1: {}", found.client.name),
        Err(e) => println!("   ⚠ {}", e),
    }

    println!("\n✓ Example completed successfully!");

    Ok(())
}
