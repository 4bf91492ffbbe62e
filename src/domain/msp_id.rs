// Copyright (c) 2025 - Cowboy AI, Inc.
//! MSP ID Value Object
//!
//! The membership-service-provider identity is the primary key for
//! organizations throughout a connection profile.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// MSP ID validation error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MspIdError {
    #[error("MSP ID is empty")]
    Empty,

    #[error("MSP ID exceeds maximum length of 128 characters: {0}")]
    TooLong(usize),

    #[error("Invalid character in MSP ID: {0:?}")]
    InvalidCharacter(char),
}

/// Organization identity (MSP ID) value object
///
/// Invariants:
/// - Non-empty
/// - At most 128 characters
/// - No whitespace or control characters
///
/// Deserialization goes through the same validation, so a `MspId` read from
/// a discovery snapshot is as trustworthy as one built with [`MspId::new`].
///
/// # Examples
///
/// ```rust
/// use hlf_connection_profile::domain::MspId;
///
/// let org = MspId::new("Org1MSP").unwrap();
/// assert_eq!(org.as_str(), "Org1MSP");
///
/// assert!(MspId::new("").is_err());
/// assert!(MspId::new("Org 1").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MspId(String);

impl MspId {
    /// Maximum length of an MSP ID
    pub const MAX_LENGTH: usize = 128;

    /// Create a new MSP ID with validation
    pub fn new(id: impl Into<String>) -> Result<Self, MspIdError> {
        let id = id.into();

        if id.is_empty() {
            return Err(MspIdError::Empty);
        }

        let len = id.chars().count();
        if len > Self::MAX_LENGTH {
            return Err(MspIdError::TooLong(len));
        }

        if let Some(ch) = id.chars().find(|c| c.is_whitespace() || c.is_control()) {
            return Err(MspIdError::InvalidCharacter(ch));
        }

        Ok(Self(id))
    }

    /// Get the MSP ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MspId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for MspId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for MspId {
    type Err = MspIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for MspId {
    type Error = MspIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for MspId {
    type Error = MspIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MspId> for String {
    fn from(value: MspId) -> Self {
        value.0
    }
}
