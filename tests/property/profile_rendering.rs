// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Profile Rendering

use hlf_connection_profile::compiler::{CompileRequest, ProfileCompiler};
use hlf_connection_profile::discovery::TopologySnapshot;
use hlf_connection_profile::domain::{MspId, Organization};
use hlf_connection_profile::ConnectionProfile;
use proptest::prelude::*;

use super::strategies::*;

const REQUESTED: &str = "Org1MSP";

/// Make sure the requested identity exists without changing membership
fn with_requested(mut snapshot: TopologySnapshot) -> TopologySnapshot {
    snapshot
        .peer_organizations
        .push(Organization::new(MspId::new(REQUESTED).unwrap()));
    snapshot
}

fn compile(snapshot: &TopologySnapshot, internal: bool) -> ConnectionProfile {
    let request = CompileRequest::new(MspId::new(REQUESTED).unwrap()).with_internal(internal);
    ProfileCompiler::default().compile(snapshot, &request).unwrap()
}

fn all_urls(profile: &ConnectionProfile) -> Vec<String> {
    profile
        .orderers
        .iter()
        .map(|(_, entry)| entry.url.clone())
        .chain(profile.peers.iter().map(|(_, entry)| entry.url.clone()))
        .chain(
            profile
                .certificate_authorities
                .iter()
                .map(|(_, entry)| entry.url.clone()),
        )
        .collect()
}

proptest! {
    /// Property: Compiling is deterministic
    ///
    /// Identical topology and parameters give byte-identical YAML.
    #[test]
    fn prop_compile_is_deterministic(snapshot in topology(), internal in any::<bool>()) {
        let snapshot = with_requested(snapshot);
        let request = CompileRequest::new(MspId::new(REQUESTED).unwrap()).with_internal(internal);
        let compiler = ProfileCompiler::default();

        let first = compiler.compile_to_yaml(&snapshot, &request).unwrap();
        let second = compiler.compile_to_yaml(&snapshot, &request).unwrap();

        prop_assert_eq!(first, second);
    }

    /// Property: One render never mixes private and public endpoints
    #[test]
    fn prop_address_selection_is_uniform(snapshot in topology(), internal in any::<bool>()) {
        let profile = compile(&with_requested(snapshot), internal);
        let (expected, forbidden) = if internal {
            (INTERNAL_MARKER, PUBLIC_MARKER)
        } else {
            (PUBLIC_MARKER, INTERNAL_MARKER)
        };

        for url in all_urls(&profile) {
            prop_assert!(url.contains(expected), "{}", url);
            prop_assert!(!url.contains(forbidden), "{}", url);
        }
    }

    /// Property: Orderers fall back to their TLS certificate, peers do not
    #[test]
    fn prop_certificate_selection(snapshot in topology()) {
        let snapshot = with_requested(snapshot);
        let profile = compile(&snapshot, false);

        for node in &snapshot.orderer_nodes {
            let expected = node.tls_ca_cert.clone().unwrap_or_else(|| node.tls_cert.clone());
            prop_assert_eq!(&profile.orderers.get(&node.name).unwrap().tls_ca_certs.pem, &expected);
        }
        for node in &snapshot.peer_nodes {
            let expected = node.tls_ca_cert.clone().unwrap_or_default();
            prop_assert_eq!(&profile.peers.get(&node.name).unwrap().tls_ca_certs.pem, &expected);
        }
    }

    /// Property: Registrar blocks appear exactly for CAs with an enrollment id
    #[test]
    fn prop_registrar_presence(snapshot in topology()) {
        let snapshot = with_requested(snapshot);
        let profile = compile(&snapshot, false);

        for ca in &snapshot.certificate_authorities {
            let entry = profile.certificate_authorities.get(&ca.name).unwrap();
            match (&ca.registrar, &entry.registrar) {
                (Some(source), Some(rendered)) => {
                    prop_assert_eq!(&source.enroll_id, &rendered.enroll_id);
                    prop_assert_eq!(&source.enroll_secret, &rendered.enroll_secret);
                }
                (None, None) => {}
                (source, rendered) => {
                    prop_assert!(false, "registrar mismatch: {:?} vs {:?}", source, rendered);
                }
            }
        }
    }

    /// Property: The default channel lists every discovered node
    #[test]
    fn prop_channel_covers_every_node(snapshot in topology()) {
        let snapshot = with_requested(snapshot);
        let profile = compile(&snapshot, false);
        let channel = &profile.channels["_default"];

        let orderers: Vec<&str> = snapshot.orderer_nodes.iter().map(|n| n.name.as_str()).collect();
        let peers: Vec<&str> = snapshot.peer_nodes.iter().map(|n| n.name.as_str()).collect();

        prop_assert_eq!(channel.orderers.iter().map(String::as_str).collect::<Vec<_>>(), orderers);
        prop_assert_eq!(channel.peers.keys().map(String::as_str).collect::<Vec<_>>(), peers);
    }

    /// Property: Emitted YAML parses back to the same document
    #[test]
    fn prop_yaml_parses_back(snapshot in topology(), internal in any::<bool>()) {
        let profile = compile(&with_requested(snapshot), internal);
        let parsed = ConnectionProfile::from_yaml(&profile.to_yaml().unwrap()).unwrap();

        prop_assert_eq!(parsed, profile);
    }
}
