// Copyright (c) 2025 - Cowboy AI, Inc.
//! Topology Discovery Abstraction
//!
//! The compiler does not discover cluster state itself. It consumes a
//! [`TopologySource`] supplied by the caller for each compile and pulls a
//! [`TopologySnapshot`] from it before doing any assembly.
//!
//! # Architecture
//!
//! ```text
//! TopologySource ──fetch──> TopologySnapshot ──> ProfileCompiler ──> ConnectionProfile
//!  (cluster API)             (owned, per call)      (pure, sync)
//! ```
//!
//! A snapshot is owned by the compile that fetched it. Nothing is cached or
//! shared between compiles, so overlapping requests never observe each
//! other's discovery results.
//!
//! # Example
//!
//! ```rust,no_run
//! use hlf_connection_profile::discovery::{SnapshotSource, TopologySnapshot};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = SnapshotSource::load("topology.json").await?;
//!     let snapshot = TopologySnapshot::fetch(&source).await?;
//!     println!("{} peers discovered", snapshot.peer_nodes.len());
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::domain::{CertificateAuthority, MspId, Organization, OrdererNode, PeerNode};

pub mod snapshot;

pub use snapshot::SnapshotSource;

/// Errors raised by a discovery collaborator
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The cluster could not be reached or refused the request
    #[error("Discovery unavailable: {0}")]
    Unavailable(String),

    /// The cluster answered with records that could not be interpreted
    #[error("Malformed discovery data: {0}")]
    Malformed(String),

    /// Reading a local topology source failed
    #[error("Discovery I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for DiscoveryError {
    fn from(err: serde_json::Error) -> Self {
        DiscoveryError::Malformed(err.to_string())
    }
}

/// Result type for discovery operations
pub type DiscoveryResult<T> = Result<T, DiscoveryError>;

/// Read interface onto live cluster topology
///
/// Every method takes an optional organization filter; `None` returns
/// records for the whole cluster. Implementations must return freshly
/// fetched, owned data: the compiler never mutates what it receives and
/// never holds it past one compile.
#[async_trait]
pub trait TopologySource: Send + Sync {
    /// Certificate authorities in the cluster
    async fn certificate_authorities(
        &self,
        filter: Option<&MspId>,
    ) -> DiscoveryResult<Vec<CertificateAuthority>>;

    /// Organizations owning ordering nodes, with their orderer membership
    async fn orderer_organizations(
        &self,
        filter: Option<&MspId>,
    ) -> DiscoveryResult<Vec<Organization>>;

    /// Flat list of ordering nodes
    async fn orderer_nodes(&self, filter: Option<&MspId>) -> DiscoveryResult<Vec<OrdererNode>>;

    /// Organizations owning peer nodes, with their peer membership
    async fn peer_organizations(&self, filter: Option<&MspId>)
        -> DiscoveryResult<Vec<Organization>>;

    /// Flat list of peer nodes
    async fn peer_nodes(&self, filter: Option<&MspId>) -> DiscoveryResult<Vec<PeerNode>>;
}

/// Topology facts for one compile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopologySnapshot {
    #[serde(default)]
    pub certificate_authorities: Vec<CertificateAuthority>,
    #[serde(default)]
    pub orderer_organizations: Vec<Organization>,
    #[serde(default)]
    pub orderer_nodes: Vec<OrdererNode>,
    #[serde(default)]
    pub peer_organizations: Vec<Organization>,
    #[serde(default)]
    pub peer_nodes: Vec<PeerNode>,
    /// When the facts were pulled from the cluster
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetched_at: Option<DateTime<Utc>>,
}

impl TopologySnapshot {
    /// Pull the whole cluster topology from a source
    ///
    /// Calls run in a fixed order (CAs, orderer organizations, orderer
    /// nodes, peer organizations, peer nodes) and the first failure is
    /// returned unchanged. There is no retry here.
    pub async fn fetch<S>(source: &S) -> DiscoveryResult<Self>
    where
        S: TopologySource + ?Sized,
    {
        let certificate_authorities = source.certificate_authorities(None).await?;
        let orderer_organizations = source.orderer_organizations(None).await?;
        let orderer_nodes = source.orderer_nodes(None).await?;
        let peer_organizations = source.peer_organizations(None).await?;
        let peer_nodes = source.peer_nodes(None).await?;

        let snapshot = Self {
            certificate_authorities,
            orderer_organizations,
            orderer_nodes,
            peer_organizations,
            peer_nodes,
            fetched_at: Some(Utc::now()),
        };

        debug!(
            cas = snapshot.certificate_authorities.len(),
            orderer_orgs = snapshot.orderer_organizations.len(),
            orderers = snapshot.orderer_nodes.len(),
            peer_orgs = snapshot.peer_organizations.len(),
            peers = snapshot.peer_nodes.len(),
            "Fetched topology snapshot"
        );

        Ok(snapshot)
    }
}
