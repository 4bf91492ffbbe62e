// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for the Organization Index
//!
//! Whatever the two discovery channels report, the merged index holds one
//! entry per identity carrying the union of that identity's membership.

use hlf_connection_profile::compiler::{CompileRequest, OrganizationIndex, ProfileCompiler};
use hlf_connection_profile::domain::{MspId, Organization};
use hlf_connection_profile::ProfileError;
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

use super::strategies::*;

#[derive(Default)]
struct Expected {
    peers: BTreeSet<String>,
    orderers: BTreeSet<String>,
}

fn expected_membership(
    orderer_orgs: &[Organization],
    peer_orgs: &[Organization],
) -> BTreeMap<MspId, Expected> {
    let mut expected: BTreeMap<MspId, Expected> = BTreeMap::new();
    for org in orderer_orgs.iter().chain(peer_orgs) {
        let entry = expected.entry(org.msp_id.clone()).or_default();
        entry.peers.extend(org.peers.iter().cloned());
        entry.orderers.extend(org.orderers.iter().cloned());
    }
    expected
}

proptest! {
    /// Property: Merge is complete
    ///
    /// Every identity from either channel appears exactly once, with the
    /// union of its peer names and the union of its orderer names.
    #[test]
    fn prop_merge_is_complete(
        orderer_orgs in organizations(ORDERER_NAMES, false),
        peer_orgs in organizations(PEER_NAMES, true),
    ) {
        let index = OrganizationIndex::build(&orderer_orgs, &peer_orgs);
        let expected = expected_membership(&orderer_orgs, &peer_orgs);

        prop_assert_eq!(index.len(), expected.len());

        for (id, membership) in &expected {
            let org = index.get(id);
            prop_assert!(org.is_some(), "missing {}", id);
            let org = org.unwrap();

            let peers: BTreeSet<String> = org.peers.iter().cloned().collect();
            let orderers: BTreeSet<String> = org.orderers.iter().cloned().collect();
            prop_assert_eq!(&peers, &membership.peers);
            prop_assert_eq!(&orderers, &membership.orderers);
        }
    }

    /// Property: Membership has no duplicate names
    #[test]
    fn prop_merged_membership_is_duplicate_free(
        orderer_orgs in organizations(ORDERER_NAMES, false),
        peer_orgs in organizations(PEER_NAMES, true),
    ) {
        let index = OrganizationIndex::build(&orderer_orgs, &peer_orgs);

        for org in index.iter() {
            let distinct: BTreeSet<&String> = org.peers.iter().collect();
            prop_assert_eq!(distinct.len(), org.peers.len());
        }
    }

    /// Property: Presence flag matches the union of both channels
    #[test]
    fn prop_presence_flag_matches_union(
        orderer_orgs in organizations(ORDERER_NAMES, false),
        peer_orgs in organizations(PEER_NAMES, true),
        target in msp_id(),
    ) {
        let (_, found) = OrganizationIndex::merge(&orderer_orgs, &peer_orgs, &target);
        let listed = orderer_orgs.iter().chain(&peer_orgs).any(|org| org.msp_id == target);

        prop_assert_eq!(found, listed);
    }

    /// Property: Unknown identities never compile
    #[test]
    fn prop_unknown_identity_fails(snapshot in topology()) {
        let request = CompileRequest::new(MspId::new(ABSENT_MSP_ID).unwrap());
        let result = ProfileCompiler::default().compile_to_yaml(&snapshot, &request);

        prop_assert!(
            matches!(result, Err(ProfileError::OrganizationNotFound(ref id)) if id == ABSENT_MSP_ID),
            "expected OrganizationNotFound"
        );
    }
}
