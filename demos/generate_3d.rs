//! This example submits one image to the 3D asset endpoint and prints the
//! resulting Drive folder.
//!
//! The service address is read from the `GEN3D_BASE_URL` environment variable
//! (a `.env` file is honored). The image defaults to `assets/large.jpg`.
//!
//! Usage:
//! `cargo run --example generate_3d [IMAGE_PATH]`

use gen3d::{print_outcome_to_console, Generate3dRequest, GenClient, ImageSource};
use std::env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from a .env file if it exists.
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let client = GenClient::new(None)?;

    let image_path = env::args()
        .nth(1)
        .unwrap_or_else(|| "assets/large.jpg".to_string());
    println!("Submitting '{}' to {}generate-3d", image_path, client.base_url());

    let request = Generate3dRequest::new("Test Product", 123, ImageSource::path(image_path));
    let result = client.generate_3d(request).await;
    print_outcome_to_console(&result)?;

    Ok(())
}
