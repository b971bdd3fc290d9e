use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum GenError {
    #[error("Base URL is missing. Please provide it or set the GEN3D_BASE_URL environment variable.")]
    MissingBaseUrl,
    #[error("Network request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("Failed to parse API response: {0}")]
    ResponseParseFailed(#[from] serde_json::Error),
    /// The service answered with a non-success status. `message` is the
    /// server-supplied `error` string when the body carried one.
    #[error("API request failed ({status}): {message}")]
    ApiError { status: StatusCode, message: String },
    #[error("URL parsing failed: {0}")]
    UrlParseFailed(#[from] url::ParseError),
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl GenError {
    /// Returns `true` when a response was received but marked unsuccessful.
    pub fn is_server_error(&self) -> bool {
        matches!(self, GenError::ApiError { .. })
    }
}
