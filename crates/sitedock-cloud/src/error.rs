//! Provisioning error types

use thiserror::Error;

/// Errors surfaced by provisioning operations
#[derive(Error, Debug)]
pub enum CloudError {
    #[error("Storage API error: {0}")]
    Storage(String),

    #[error("CDN API error: {0}")]
    Cdn(String),

    #[error("Identity resolution failed: {0}")]
    Identity(String),

    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CloudError {
    /// Coarse failure category used in user-facing messages
    pub fn category(&self) -> &'static str {
        match self {
            CloudError::Storage(_) | CloudError::InvalidRegion(_) => "storage",
            CloudError::Cdn(_) => "cdn",
            CloudError::Identity(_) => "identity",
            CloudError::InvalidConfig(_) | CloudError::Io(_) | CloudError::Json(_) => "local",
        }
    }
}

pub type Result<T> = std::result::Result<T, CloudError>;
