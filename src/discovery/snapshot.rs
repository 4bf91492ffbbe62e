// Copyright (c) 2025 - Cowboy AI, Inc.
//! Snapshot-backed topology source
//!
//! Serves topology facts from an in-memory [`TopologySnapshot`], typically
//! one exported from a cluster as JSON. Useful for offline compiles and for
//! tests.

use async_trait::async_trait;
use std::path::Path;
use tracing::info;

use super::{DiscoveryResult, TopologySnapshot, TopologySource};
use crate::domain::{CertificateAuthority, MspId, Organization, OrdererNode, PeerNode};

/// [`TopologySource`] over a fixed snapshot
///
/// Filtering keeps the matching organizations and the nodes those
/// organizations own. Certificate authorities carry no owning organization
/// and are always returned in full.
#[derive(Debug, Clone, Default)]
pub struct SnapshotSource {
    snapshot: TopologySnapshot,
}

impl SnapshotSource {
    pub fn new(snapshot: TopologySnapshot) -> Self {
        Self { snapshot }
    }

    /// Load a snapshot from a JSON file
    pub async fn load(path: impl AsRef<Path>) -> DiscoveryResult<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let snapshot = Self::parse(&bytes)?;

        info!("Loaded topology snapshot from {}", path.display());
        Ok(Self::new(snapshot))
    }

    /// Parse a snapshot from JSON bytes
    pub fn parse(bytes: &[u8]) -> DiscoveryResult<TopologySnapshot> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn snapshot(&self) -> &TopologySnapshot {
        &self.snapshot
    }

    fn organizations(orgs: &[Organization], filter: Option<&MspId>) -> Vec<Organization> {
        orgs.iter()
            .filter(|org| filter.map_or(true, |id| &org.msp_id == id))
            .cloned()
            .collect()
    }

    fn owns_orderer(&self, filter: Option<&MspId>, name: &str) -> bool {
        let Some(id) = filter else {
            return true;
        };
        self.snapshot
            .orderer_organizations
            .iter()
            .chain(&self.snapshot.peer_organizations)
            .any(|org| &org.msp_id == id && org.orderers.contains(name))
    }

    fn owns_peer(&self, filter: Option<&MspId>, name: &str) -> bool {
        let Some(id) = filter else {
            return true;
        };
        self.snapshot
            .peer_organizations
            .iter()
            .chain(&self.snapshot.orderer_organizations)
            .any(|org| &org.msp_id == id && org.peers.contains(name))
    }
}

impl From<TopologySnapshot> for SnapshotSource {
    fn from(snapshot: TopologySnapshot) -> Self {
        Self::new(snapshot)
    }
}

#[async_trait]
impl TopologySource for SnapshotSource {
    async fn certificate_authorities(
        &self,
        _filter: Option<&MspId>,
    ) -> DiscoveryResult<Vec<CertificateAuthority>> {
        Ok(self.snapshot.certificate_authorities.clone())
    }

    async fn orderer_organizations(
        &self,
        filter: Option<&MspId>,
    ) -> DiscoveryResult<Vec<Organization>> {
        Ok(Self::organizations(
            &self.snapshot.orderer_organizations,
            filter,
        ))
    }

    async fn orderer_nodes(&self, filter: Option<&MspId>) -> DiscoveryResult<Vec<OrdererNode>> {
        Ok(self
            .snapshot
            .orderer_nodes
            .iter()
            .filter(|node| self.owns_orderer(filter, &node.name))
            .cloned()
            .collect())
    }

    async fn peer_organizations(
        &self,
        filter: Option<&MspId>,
    ) -> DiscoveryResult<Vec<Organization>> {
        Ok(Self::organizations(&self.snapshot.peer_organizations, filter))
    }

    async fn peer_nodes(&self, filter: Option<&MspId>) -> DiscoveryResult<Vec<PeerNode>> {
        Ok(self
            .snapshot
            .peer_nodes
            .iter()
            .filter(|node| self.owns_peer(filter, &node.name))
            .cloned()
            .collect())
    }
}
