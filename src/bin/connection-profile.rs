// Copyright (c) 2025 - Cowboy AI, Inc.
//! Connection Profile CLI
//!
//! Compiles a connection profile for one organization from an exported
//! topology snapshot and writes the YAML document to stdout (or a file).
//!
//! Run with: cargo run --bin connection-profile
//!
//! Environment:
//! 1. TOPOLOGY_FILE - JSON topology snapshot (required)
//! 2. MSP_ID - organization to render for (required)
//! 3. PROFILE_INTERNAL - `true` for cluster-private endpoints (default: false)
//! 4. PROFILE_OUTPUT - write here instead of stdout (optional)
//! 5. PROFILE_NETWORK_NAME, PROFILE_VERSION, PROFILE_CRYPTO_PATH,
//!    PROFILE_CA_NAME, PROFILE_CHANNEL - document settings (optional)

use anyhow::{Context, Result};
use hlf_connection_profile::{
    ConnectionProfileService, NetworkConfigService, ProfileSettings, SnapshotSource,
};
use std::path::PathBuf;
use tracing::info;

/// Configuration for one CLI run
#[derive(Debug, Clone)]
struct CliConfig {
    /// Topology snapshot to compile from
    topology_file: PathBuf,
    /// Requested organization
    msp_id: String,
    /// Use private endpoints
    internal: bool,
    /// Output path, stdout when unset
    output: Option<PathBuf>,
    /// Document settings
    settings: ProfileSettings,
}

impl CliConfig {
    /// Load configuration from environment variables
    fn from_env() -> Result<Self> {
        let topology_file = std::env::var("TOPOLOGY_FILE")
            .context("TOPOLOGY_FILE not set")?
            .into();

        let msp_id = std::env::var("MSP_ID").context("MSP_ID not set")?;

        let internal = match std::env::var("PROFILE_INTERNAL") {
            Ok(value) => value
                .parse::<bool>()
                .with_context(|| format!("PROFILE_INTERNAL must be true or false, got {:?}", value))?,
            Err(_) => false,
        };

        let output = std::env::var("PROFILE_OUTPUT").ok().map(PathBuf::from);

        let settings = ProfileSettings::from_env().context("Invalid profile settings")?;

        Ok(Self {
            topology_file,
            msp_id,
            internal,
            output,
            settings,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the document
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = CliConfig::from_env()?;
    info!("Configuration loaded:");
    info!("  - Topology: {}", config.topology_file.display());
    info!("  - MSP ID: {}", config.msp_id);
    info!("  - Internal addresses: {}", config.internal);

    let source = SnapshotSource::load(&config.topology_file)
        .await
        .with_context(|| format!("Failed to load {}", config.topology_file.display()))?;

    let service = ConnectionProfileService::new(config.settings.clone());
    let yaml = service
        .network_config_for(&source, &config.msp_id, config.internal)
        .await
        .with_context(|| format!("Failed to compile profile for {}", config.msp_id))?;

    match &config.output {
        Some(path) => {
            tokio::fs::write(path, yaml.as_bytes())
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote connection profile to {}", path.display());
        }
        None => print!("{}", yaml),
    }

    Ok(())
}
