//! Server configuration management

use crate::error::{ApiError, Result};
use serde::{Deserialize, Serialize};

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,

    /// Site name shown in the post index hero
    pub site_name: String,

    /// Site description shown in the post index hero
    pub site_description: String,
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| ApiError::Config("Invalid PORT value".to_string()))?,
            site_name: std::env::var("SITE_NAME")
                .unwrap_or_else(|_| "Hildebrandt Management".to_string()),
            site_description: std::env::var("SITE_DESCRIPTION").unwrap_or_else(|_| {
                "Zarządzanie i rozwój firm z branży budowlanej i nieruchomości".to_string()
            }),
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            site_name: "Hildebrandt Management".to_string(),
            site_description: "Zarządzanie i rozwój firm z branży budowlanej i nieruchomości"
                .to_string(),
        }
    }
}
