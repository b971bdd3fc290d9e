//! This example asks the image endpoint for a picture generated from a prompt.
//!
//! Passing an image path attaches it as a reference image together with an
//! image guidance scale. Without it the service works from the prompt alone.
//!
//! Usage:
//! `cargo run --example generate_image [REFERENCE_IMAGE]`

use gen3d::{print_outcome_to_console, GenClient, GenerateImageRequest, ImageSource};
use std::env;

const PROMPT: &str = "a car with a sporty look and a dark tinted window";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let client = GenClient::new(None)?;

    let mut request = GenerateImageRequest::new("Test Product", 123, PROMPT, 3.3);
    if let Some(reference) = env::args().nth(1) {
        println!("Using reference image '{}'", reference);
        request = request
            .with_image(ImageSource::path(reference))
            .with_img_guidance_scale(1.6);
    }

    println!("Submitting prompt: '{}'", PROMPT);
    let result = client.generate_image(request).await;
    print_outcome_to_console(&result)?;

    Ok(())
}
