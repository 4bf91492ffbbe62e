// Copyright (c) 2025 - Cowboy AI, Inc.
//! Organization Index Builder
//!
//! Merges the organizations reported by the orderer-side and peer-side
//! discovery channels into one mapping keyed by MSP ID.
//!
//! An identity reported by both channels is one logical organization: its
//! peer and orderer membership is unioned, never overwritten, so an
//! organization owning both peers and orderers keeps both sides.

use std::collections::btree_map::{self, BTreeMap};
use tracing::debug;

use crate::domain::{MspId, Organization};
use crate::errors::{ProfileError, ProfileResult};

/// Merged organizations, ordered by MSP ID
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizationIndex {
    organizations: BTreeMap<MspId, Organization>,
}

impl OrganizationIndex {
    /// Merge orderer-owning organizations, then peer-owning organizations
    pub fn build(orderer_orgs: &[Organization], peer_orgs: &[Organization]) -> Self {
        let mut index = Self::default();
        for org in orderer_orgs.iter().chain(peer_orgs) {
            index.insert(org);
        }
        index
    }

    /// Merge both channels and report whether `target` is present
    pub fn merge(
        orderer_orgs: &[Organization],
        peer_orgs: &[Organization],
        target: &MspId,
    ) -> (Self, bool) {
        let index = Self::build(orderer_orgs, peer_orgs);
        let found = index.contains(target);
        (index, found)
    }

    /// Merge both channels, failing if `target` is absent from the union
    pub fn resolve(
        orderer_orgs: &[Organization],
        peer_orgs: &[Organization],
        target: &MspId,
    ) -> ProfileResult<Self> {
        let (index, found) = Self::merge(orderer_orgs, peer_orgs, target);
        if !found {
            return Err(ProfileError::OrganizationNotFound(target.to_string()));
        }
        debug!(organizations = index.len(), "Resolved organization {}", target);
        Ok(index)
    }

    fn insert(&mut self, org: &Organization) {
        match self.organizations.entry(org.msp_id.clone()) {
            btree_map::Entry::Vacant(entry) => {
                entry.insert(org.clone());
            }
            btree_map::Entry::Occupied(mut entry) => {
                entry.get_mut().absorb(org);
            }
        }
    }

    pub fn get(&self, msp_id: &MspId) -> Option<&Organization> {
        self.organizations.get(msp_id)
    }

    pub fn contains(&self, msp_id: &MspId) -> bool {
        self.organizations.contains_key(msp_id)
    }

    pub fn len(&self) -> usize {
        self.organizations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.organizations.is_empty()
    }

    /// Organizations in MSP ID order
    pub fn iter(&self) -> impl Iterator<Item = &Organization> {
        self.organizations.values()
    }
}
