//! Error types for the hm-site library
//!
//! Rendering the constant content tables cannot fail; errors only arise
//! from the external post provider and from configuration.

use thiserror::Error;

/// Main error type for the hm-site library
#[derive(Error, Debug)]
pub enum SiteError {
    /// The external post provider failed to supply content
    #[error("Post provider error: {reason}")]
    Provider { reason: String },

    /// Configuration and initialization errors
    #[error("Invalid configuration: {setting} - {reason}")]
    Config { setting: String, reason: String },
}

impl SiteError {
    /// Create a provider error
    pub fn provider(reason: impl Into<String>) -> Self {
        SiteError::Provider {
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn config(setting: impl Into<String>, reason: impl Into<String>) -> Self {
        SiteError::Config {
            setting: setting.into(),
            reason: reason.into(),
        }
    }
}

/// Shorthand result type for hm-site operations
pub type Result<T> = std::result::Result<T, SiteError>;
