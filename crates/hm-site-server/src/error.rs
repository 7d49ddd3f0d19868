//! Error handling for the site server

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use hm_site::SiteError;
use serde_json::json;
use thiserror::Error;

/// Result type for server operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Server error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Site error: {0}")]
    Site(#[from] SiteError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::Site(ref e) => match e {
                SiteError::Provider { .. } => (StatusCode::BAD_GATEWAY, self.to_string()),
                SiteError::Config { .. } => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                ),
            },
            ApiError::Config(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Configuration error".to_string(),
            ),
            ApiError::Serialization(_) => {
                (StatusCode::BAD_REQUEST, "Invalid JSON format".to_string())
            }
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}
