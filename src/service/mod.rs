// Copyright (c) 2025 - Cowboy AI, Inc.
//! Service Layer for Connection Profiles
//!
//! Ties discovery and compilation together for a caller such as a query
//! endpoint.
//!
//! # Architecture
//!
//! ```text
//! Client Request (MSP ID, internal?)
//!     ↓
//! Service Layer (this module)
//!     ↓
//! TopologySource (injected per call) → TopologySnapshot
//!     ↓
//! ProfileCompiler → ConnectionProfile → YAML
//! ```
//!
//! The discovery handle is passed into every call rather than held by the
//! service, so the service itself carries no cluster state.
//!
//! # Example
//!
//! ```rust,no_run
//! use hlf_connection_profile::discovery::SnapshotSource;
//! use hlf_connection_profile::service::{ConnectionProfileService, NetworkConfigService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = SnapshotSource::load("topology.json").await?;
//!     let service = ConnectionProfileService::default();
//!
//!     let yaml = service.network_config_for(&source, "Org1MSP", false).await?;
//!     println!("{}", yaml);
//!     Ok(())
//! }
//! ```

pub mod connection_profile;

pub use connection_profile::{ConnectionProfileService, NetworkConfigService};
