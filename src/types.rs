use crate::error::GenError;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::path::PathBuf;
use tokio::fs::File;
use tokio_util::codec::{BytesCodec, FramedRead};

/// Folder viewer prefix; the service shares every result folder publicly.
pub const DRIVE_FOLDER_URL: &str = "https://drive.google.com/drive/folders/";

/// Where the image part of a generation request comes from.
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// A local file, streamed from disk when the request is sent.
    Path(PathBuf),
    /// In-memory image content.
    Bytes {
        /// The file name announced in the multipart part.
        file_name: String,
        /// The raw image bytes.
        data: Vec<u8>,
    },
}

impl ImageSource {
    /// Creates an image source from a local file path.
    pub fn path(path: impl Into<PathBuf>) -> Self {
        ImageSource::Path(path.into())
    }

    /// Creates an image source from bytes already in memory.
    pub fn bytes(file_name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        ImageSource::Bytes {
            file_name: file_name.into(),
            data: data.into(),
        }
    }

    /// Turns the source into a multipart part.
    ///
    /// For [`ImageSource::Path`] the file is opened here, so a missing file
    /// fails before any request goes out. The handle then belongs to the
    /// request body and is closed once the body is dropped.
    pub(crate) async fn into_part(self) -> Result<Part, GenError> {
        match self {
            ImageSource::Path(path) => {
                let file = File::open(&path).await?;
                let length = file.metadata().await?.len();

                let file_name = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .ok_or_else(|| {
                        GenError::IoError(std::io::Error::new(
                            std::io::ErrorKind::InvalidInput,
                            format!("Could not determine file name of {}", path.display()),
                        ))
                    })?
                    .to_string();
                let mime_type = mime_guess::from_path(&path)
                    .first_or_octet_stream()
                    .to_string();

                let stream = FramedRead::new(file, BytesCodec::new());
                let body = reqwest::Body::wrap_stream(stream);

                Ok(Part::stream_with_length(body, length)
                    .file_name(file_name)
                    .mime_str(&mime_type)?)
            }
            ImageSource::Bytes { file_name, data } => {
                let mime_type = mime_guess::from_path(&file_name)
                    .first_or_octet_stream()
                    .to_string();
                Ok(Part::bytes(data).file_name(file_name).mime_str(&mime_type)?)
            }
        }
    }
}

/// Form fields for `POST /generate-3d`.
#[derive(Debug, Clone)]
pub struct Generate3dRequest {
    /// Product name; the service names the result folder `<product_name>_<message_number>`.
    pub product_name: String,
    /// Caller-chosen sequence number.
    pub message_number: u64,
    /// The image the 3D asset is reconstructed from.
    pub image: ImageSource,
}

impl Generate3dRequest {
    pub fn new(product_name: impl Into<String>, message_number: u64, image: ImageSource) -> Self {
        Self {
            product_name: product_name.into(),
            message_number,
            image,
        }
    }

    pub(crate) async fn into_form(self) -> Result<Form, GenError> {
        let image = self.image.into_part().await?;
        Ok(Form::new()
            .text("product_name", self.product_name)
            .text("message_number", self.message_number.to_string())
            .part("image", image))
    }
}

/// Form fields for `POST /generate-image`.
#[derive(Debug, Clone)]
pub struct GenerateImageRequest {
    pub product_name: String,
    pub message_number: u64,
    /// Text instruction for the image model.
    pub prompt: String,
    /// Text guidance strength.
    pub guidance_scale: f64,
    /// Image guidance strength. Only meaningful together with `image`.
    pub img_guidance_scale: Option<f64>,
    /// Optional reference image; without it the service generates from the prompt alone.
    pub image: Option<ImageSource>,
}

impl GenerateImageRequest {
    pub fn new(
        product_name: impl Into<String>,
        message_number: u64,
        prompt: impl Into<String>,
        guidance_scale: f64,
    ) -> Self {
        Self {
            product_name: product_name.into(),
            message_number,
            prompt: prompt.into(),
            guidance_scale,
            img_guidance_scale: None,
            image: None,
        }
    }

    /// Attaches a reference image.
    pub fn with_image(mut self, image: ImageSource) -> Self {
        self.image = Some(image);
        self
    }

    /// Sets the image guidance strength.
    pub fn with_img_guidance_scale(mut self, scale: f64) -> Self {
        self.img_guidance_scale = Some(scale);
        self
    }

    pub(crate) async fn into_form(self) -> Result<Form, GenError> {
        if self.img_guidance_scale.is_some() && self.image.is_none() {
            tracing::warn!("img_guidance_scale is set without an image; the service ignores it");
        }

        let mut form = Form::new()
            .text("product_name", self.product_name)
            .text("message_number", self.message_number.to_string())
            .text("prompt", self.prompt)
            .text("guidance_scale", self.guidance_scale.to_string());

        if let Some(scale) = self.img_guidance_scale {
            form = form.text("img_guidance_scale", scale.to_string());
        }
        if let Some(image) = self.image {
            form = form.part("image", image.into_part().await?);
        }

        Ok(form)
    }
}

/// The body of a successful generation call.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct GenerationResponse {
    /// Identifier of the Drive folder holding the generated files.
    pub drive_folder_id: String,
    /// Human-readable status line, e.g. "3D assets generated successfully".
    #[serde(default)]
    pub message: Option<String>,
}

impl GenerationResponse {
    /// The public viewer URL of the result folder.
    pub fn folder_url(&self) -> String {
        folder_url(&self.drive_folder_id)
    }
}

/// Builds the viewer URL for a Drive folder id.
pub fn folder_url(drive_folder_id: &str) -> String {
    format!("{}{}", DRIVE_FOLDER_URL, drive_folder_id)
}

/// The welcome payload served at the service root.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServiceStatus {
    pub message: String,
}

/// (Internal) The body the service sends with a failure status.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub(crate) error: String,
}
