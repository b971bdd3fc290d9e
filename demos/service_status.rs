//! This example checks that the generation service is reachable.
//!
//! Usage:
//! `cargo run --example service_status`

use gen3d::GenClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let client = GenClient::new(None)?;

    match client.service_status().await {
        Ok(status) => println!("Service is up: {}", status.message),
        Err(e) => eprintln!("Error: {}", e),
    }

    Ok(())
}
