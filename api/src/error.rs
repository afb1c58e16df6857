// SPDX-License-Identifier: Apache-2.0

/// Event service client errors.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP layer error (transport failure or an error status code).
    #[error("HTTP error: {0}")]
    Http(String),

    /// JSON encoding/decoding error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Resource not found (HTTP 404).
    #[error("resource not found: {0}")]
    NotFound(String),

    /// The server answered with something the client cannot use.
    #[error("invalid server response: {0}")]
    InvalidResponse(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Json(e.to_string())
        } else {
            Self::Http(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
