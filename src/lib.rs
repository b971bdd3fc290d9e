//! An asynchronous client for a self-hosted 3D asset and image generation API.
//!
//! The service accepts multipart form submissions, runs a generation
//! pipeline, uploads the results to a public Google Drive folder and answers
//! with that folder's id. This crate builds the forms, sends them, and
//! renders the outcome for the console.
//!
//! ## Features
//! - Image-to-3D generation (`POST /generate-3d`).
//! - Prompt-driven image generation with an optional reference image (`POST /generate-image`).
//! - Streaming upload of local image files.
//! - Typed errors separating server-reported failures from transport failures.
//! - Console reporting of results with the folder viewer URL.

mod client;
mod error;
mod report;
mod types;

pub use client::{GenClient, BASE_URL_ENV};
pub use error::GenError;
pub use report::{print_outcome, print_outcome_to_console};
pub use types::{
    folder_url, Generate3dRequest, GenerateImageRequest, GenerationResponse, ImageSource,
    ServiceStatus, DRIVE_FOLDER_URL,
};
