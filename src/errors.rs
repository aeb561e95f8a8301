//! Centralized error handling for the langstats application.
//!
//! Fatal problems (configuration, I/O, rasterization) surface through
//! [`LangStatsError`]. [`GitHubError`] describes a single failed fetch and is
//! normally recovered by the caller rather than propagated.

use thiserror::Error;

/// Unified error type for the langstats application.
#[allow(clippy::enum_variant_names)]
#[derive(Error, Debug)]
pub enum LangStatsError {
    /// Missing or malformed configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rendering and rasterization errors
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client construction errors
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Configuration specific errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No token was supplied through the CLI or `GITHUB_TOKEN`
    #[error("GITHUB_TOKEN is not set (create one at https://github.com/settings/tokens with the `repo` scope)")]
    MissingToken,

    /// The token cannot be sent as an HTTP header
    #[error("GitHub token contains characters that are not valid in an HTTP header")]
    InvalidToken,
}

/// GitHub API specific errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GitHubError {
    /// Resource not found (404)
    #[error("Resource not found")]
    NotFound,

    /// Rate limit exceeded (403 / 429)
    #[error("GitHub API rate limit exceeded")]
    RateLimited,

    /// Bad or expired credentials (401)
    #[error("Authentication failed")]
    AuthError,

    /// Any other non-success status
    #[error("GitHub API error: {0}")]
    ApiError(u16),

    /// Transport failure before a response arrived
    #[error("Network error while contacting GitHub API: {0}")]
    NetworkError(String),

    /// Response body did not match the expected shape
    #[error("Failed to decode GitHub API response: {0}")]
    Decode(String),
}

impl GitHubError {
    /// Maps a non-success HTTP status code to an error.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => GitHubError::AuthError,
            403 | 429 => GitHubError::RateLimited,
            404 => GitHubError::NotFound,
            code => GitHubError::ApiError(code),
        }
    }
}

/// Rendering specific errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// The generated document could not be parsed as SVG
    #[error("Failed to parse SVG: {0}")]
    SvgParse(String),

    /// Failed to create pixmap
    #[error("Failed to create pixmap: {0}")]
    PixmapCreation(String),

    /// Failed to write PNG
    #[error("Failed to write PNG: {0}")]
    PngWrite(String),
}

/// Type alias for Result using the unified error type
pub type Result<T> = std::result::Result<T, LangStatsError>;
