// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for connection profile compilation

use thiserror::Error;

use crate::discovery::DiscoveryError;
use crate::domain::MspIdError;

/// Errors that can occur while compiling a connection profile
///
/// Every variant is terminal for the compile that raised it; no partial
/// document is ever returned alongside an error.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Fetching topology facts failed
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    /// Requested organization is not present in either discovery channel
    #[error("organization {0} not found")]
    OrganizationNotFound(String),

    /// Requested organization identity is malformed
    #[error("Invalid MSP ID: {0}")]
    InvalidMspId(#[from] MspIdError),

    /// The document tree could not be emitted as text
    #[error("Rendering error: {0}")]
    Render(String),

    /// Profile text could not be read back into a document tree
    #[error("Profile parse error: {0}")]
    Parse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for connection profile operations
pub type ProfileResult<T> = Result<T, ProfileError>;

/// Emitter failures; parse failures go through [`ProfileError::Parse`]
impl From<serde_yaml::Error> for ProfileError {
    fn from(err: serde_yaml::Error) -> Self {
        ProfileError::Render(err.to_string())
    }
}
