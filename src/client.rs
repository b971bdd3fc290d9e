use crate::error::GenError;
use crate::types::{
    ErrorBody, Generate3dRequest, GenerateImageRequest, GenerationResponse, ServiceStatus,
};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::Form;
use serde::de::DeserializeOwned;
use std::env;
use tracing::{debug, warn};
use url::Url;

/// Environment variable consulted by [`GenClient::new`].
pub const BASE_URL_ENV: &str = "GEN3D_BASE_URL";

/// Tells the ngrok edge to skip its browser interstitial page.
const SKIP_BROWSER_WARNING: &str = "ngrok-skip-browser-warning";

/// The client for the generation service.
///
/// It holds the shared `reqwest::Client` and the base URL for all requests.
/// It is cheap to clone and safe to share across tasks.
#[derive(Clone, Debug)]
pub struct GenClient {
    client: reqwest::Client,
    base_url: Url,
}

impl GenClient {
    /// Creates a new `GenClient`.
    ///
    /// Uses `base_url` when given, otherwise the `GEN3D_BASE_URL` environment variable.
    ///
    /// # Errors
    ///
    /// - `GenError::MissingBaseUrl` if neither source provides a URL.
    /// - `GenError::UrlParseFailed` if the URL is invalid.
    /// - `GenError::RequestFailed` if the internal HTTP client fails to build.
    pub fn new(base_url: Option<String>) -> Result<Self, GenError> {
        let Some(base_url) = base_url.or_else(|| env::var(BASE_URL_ENV).ok()) else {
            return Err(GenError::MissingBaseUrl);
        };
        Self::new_with_url(&base_url)
    }

    /// Creates a new `GenClient` for an explicit base URL, e.g. a tunnel
    /// address or a mock server.
    ///
    /// A base path without a trailing slash is treated as a directory, so
    /// `https://host/api` serves `https://host/api/generate-3d`.
    pub fn new_with_url(base_url: &str) -> Result<Self, GenError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(SKIP_BROWSER_WARNING),
            HeaderValue::from_static("true"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self { client, base_url })
    }

    /// The normalized base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Submits an image for 3D asset generation.
    ///
    /// Sends `product_name`, `message_number` and the `image` file as a
    /// multipart form to `generate-3d`.
    ///
    /// # Returns
    ///
    /// A [`GenerationResponse`] naming the Drive folder with the generated assets.
    ///
    /// # Errors
    ///
    /// `GenError::ApiError` carries the server's `error` string when the
    /// service reports a failure. Local file problems surface as
    /// `GenError::IoError` before anything is sent.
    pub async fn generate_3d(
        &self,
        request: Generate3dRequest,
    ) -> Result<GenerationResponse, GenError> {
        let form = request.into_form().await?;
        self.post_form("generate-3d", form).await
    }

    /// Submits a prompt, optionally with a reference image, for image generation.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use gen3d::{GenClient, GenerateImageRequest};
    /// # #[tokio::main]
    /// # async fn main() -> anyhow::Result<()> {
    /// let client = GenClient::new_with_url("https://example.ngrok-free.app")?;
    /// let request = GenerateImageRequest::new("Test Product", 123, "a sporty car", 3.3);
    /// let response = client.generate_image(request).await?;
    /// println!("{}", response.folder_url());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn generate_image(
        &self,
        request: GenerateImageRequest,
    ) -> Result<GenerationResponse, GenError> {
        let form = request.into_form().await?;
        self.post_form("generate-image", form).await
    }

    /// Fetches the welcome message served at the service root.
    pub async fn service_status(&self) -> Result<ServiceStatus, GenError> {
        debug!(url = %self.base_url, "probing service");
        let response = self.client.get(self.base_url.clone()).send().await?;
        parse_response(response).await
    }

    async fn post_form<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        form: Form,
    ) -> Result<T, GenError> {
        let url = self.base_url.join(endpoint)?;
        debug!(%url, boundary = form.boundary(), "submitting generation request");

        let response = self.client.post(url).multipart(form).send().await?;
        parse_response(response).await
    }
}

async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, GenError> {
    let status = response.status();
    let body = response.bytes().await?;

    if status.is_success() {
        return Ok(serde_json::from_slice(&body)?);
    }

    let message = match serde_json::from_slice::<ErrorBody>(&body) {
        Ok(error_body) => error_body.error,
        Err(_) => {
            let text = String::from_utf8_lossy(&body).trim().to_string();
            if text.is_empty() {
                status.canonical_reason().unwrap_or("unknown error").to_string()
            } else {
                text
            }
        }
    };

    warn!(%status, %message, "service reported a failure");
    Err(GenError::ApiError { status, message })
}
