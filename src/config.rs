// Copyright (c) 2025 - Cowboy AI, Inc.
//! Profile settings
//!
//! Constants written into every profile that do not come from discovery.

use serde::{Deserialize, Serialize};

use crate::errors::{ProfileError, ProfileResult};

/// Fixed values stamped into rendered profiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileSettings {
    /// Network name at the top of the document
    pub network_name: String,
    /// Profile format version
    pub version: String,
    /// Client-side crypto material path recorded per organization
    pub crypto_path: String,
    /// Label written as `caName` for every certificate authority
    pub ca_name: String,
    /// Name of the single channel listing every node
    pub channel: String,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            network_name: "hlf-network".to_string(),
            version: "1.0.0".to_string(),
            crypto_path: "/tmp/cryptopath".to_string(),
            ca_name: "ca".to_string(),
            channel: "_default".to_string(),
        }
    }
}

impl ProfileSettings {
    /// Load settings from environment variables, falling back to defaults
    ///
    /// - `PROFILE_NETWORK_NAME`
    /// - `PROFILE_VERSION`
    /// - `PROFILE_CRYPTO_PATH`
    /// - `PROFILE_CA_NAME`
    /// - `PROFILE_CHANNEL`
    pub fn from_env() -> ProfileResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> ProfileResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let read = |key: &str, default: String| -> ProfileResult<String> {
            match lookup(key) {
                Some(value) if value.trim().is_empty() => Err(ProfileError::Configuration(
                    format!("{} is set but empty", key),
                )),
                Some(value) => Ok(value),
                None => Ok(default),
            }
        };

        Ok(Self {
            network_name: read("PROFILE_NETWORK_NAME", defaults.network_name)?,
            version: read("PROFILE_VERSION", defaults.version)?,
            crypto_path: read("PROFILE_CRYPTO_PATH", defaults.crypto_path)?,
            ca_name: read("PROFILE_CA_NAME", defaults.ca_name)?,
            channel: read("PROFILE_CHANNEL", defaults.channel)?,
        })
    }
}
