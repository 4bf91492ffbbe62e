// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property Test Strategies
//!
//! Random topologies built from small fixed name pools so that identities
//! and node names collide often across discovery channels.

use hlf_connection_profile::discovery::TopologySnapshot;
use hlf_connection_profile::domain::{
    CertificateAuthority, MspId, Organization, OrdererNode, PeerNode, Registrar,
};
use proptest::prelude::*;

pub const MSP_IDS: &[&str] = &["Org1MSP", "Org2MSP", "Org3MSP", "OrdererMSP"];
pub const PEER_NAMES: &[&str] = &["peer0", "peer1", "peer2", "peer3", "peer4"];
pub const ORDERER_NAMES: &[&str] = &["orderer0", "orderer1", "orderer2"];
pub const CA_NAMES: &[&str] = &["ca0", "ca1", "ca2"];

/// Identity never produced by [`msp_id`]
pub const ABSENT_MSP_ID: &str = "Org9MSP";

pub const INTERNAL_MARKER: &str = ".internal:";
pub const PUBLIC_MARKER: &str = ".public.example.com:";

pub fn msp_id() -> impl Strategy<Value = MspId> {
    prop::sample::select(MSP_IDS).prop_map(|id| MspId::new(id).unwrap())
}

/// Organizations with peer (`peers == true`) or orderer membership
pub fn organizations(
    names: &'static [&'static str],
    peers: bool,
) -> impl Strategy<Value = Vec<Organization>> {
    prop::collection::vec(
        (msp_id(), prop::collection::vec(prop::sample::select(names), 0..4)),
        0..5,
    )
    .prop_map(move |entries| {
        entries
            .into_iter()
            .map(|(id, members)| {
                if peers {
                    Organization::new(id).with_peers(members)
                } else {
                    Organization::new(id).with_orderers(members)
                }
            })
            .collect()
    })
}

fn pem(kind: &str, name: &str) -> String {
    format!(
        "-----BEGIN CERTIFICATE-----\nMII{}{}\n-----END CERTIFICATE-----\n",
        kind, name
    )
}

fn private_url(name: &str, port: u16) -> String {
    format!("{}{}{}", name, INTERNAL_MARKER, port)
}

fn public_url(name: &str) -> String {
    format!("{}{}443", name, PUBLIC_MARKER)
}

fn names(pool: &'static [&'static str]) -> impl Strategy<Value = Vec<&'static str>> {
    prop::sample::subsequence(pool.to_vec(), 0..=pool.len())
}

/// Full topology; certificate and registrar presence vary per node
pub fn topology() -> impl Strategy<Value = TopologySnapshot> {
    (
        organizations(ORDERER_NAMES, false),
        organizations(PEER_NAMES, true),
        (names(PEER_NAMES), prop::collection::vec(any::<bool>(), PEER_NAMES.len())),
        (names(ORDERER_NAMES), prop::collection::vec(any::<bool>(), ORDERER_NAMES.len())),
        (names(CA_NAMES), prop::collection::vec(any::<bool>(), CA_NAMES.len())),
    )
        .prop_map(
            |(orderer_orgs, peer_orgs, (peers, peer_flags), (orderers, orderer_flags), (cas, ca_flags))| {
                TopologySnapshot {
                    certificate_authorities: cas
                        .iter()
                        .zip(ca_flags)
                        .map(|(name, with_registrar)| CertificateAuthority {
                            name: name.to_string(),
                            private_url: private_url(name, 7054),
                            public_url: public_url(name),
                            tls_cert: pem("CA", name),
                            registrar: with_registrar.then(|| Registrar {
                                enroll_id: format!("{}-admin", name),
                                enroll_secret: format!("{}-secret", name),
                            }),
                        })
                        .collect(),
                    orderer_organizations: orderer_orgs,
                    orderer_nodes: orderers
                        .iter()
                        .zip(orderer_flags)
                        .map(|(name, with_ca)| OrdererNode {
                            name: name.to_string(),
                            private_url: private_url(name, 7050),
                            public_url: public_url(name),
                            tls_cert: pem("TLS", name),
                            tls_ca_cert: with_ca.then(|| pem("TLSCA", name)),
                        })
                        .collect(),
                    peer_organizations: peer_orgs,
                    peer_nodes: peers
                        .iter()
                        .zip(peer_flags)
                        .map(|(name, with_ca)| PeerNode {
                            name: name.to_string(),
                            private_url: private_url(name, 7051),
                            public_url: public_url(name),
                            tls_ca_cert: with_ca.then(|| pem("TLSCA", name)),
                        })
                        .collect(),
                    fetched_at: None,
                }
            },
        )
}
