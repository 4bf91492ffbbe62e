// Copyright (c) 2025 - Cowboy AI, Inc.
//! Connection Profile Renderer
//!
//! Builds the [`ConnectionProfile`] tree from a merged organization index
//! and the flat node lists of a topology snapshot. Rendering is a single
//! pure pass; emitting text is left to [`ConnectionProfile::to_yaml`].
//!
//! # Rules
//!
//! - Orderer and peer URLs use `grpcs://`, CA URLs use `https://`, with the
//!   private or public endpoint picked by the request's [`AddressScope`]
//! - Orderers trust their TLS CA certificate, falling back to their TLS
//!   certificate; peers trust their TLS CA certificate only
//! - A CA's `registrar` block is written only when an enrollment id is set
//! - The default channel lists every orderer and every peer

use indexmap::IndexMap;
use std::collections::{BTreeMap, HashSet};
use tracing::warn;

use super::index::OrganizationIndex;
use super::CompileRequest;
use crate::config::ProfileSettings;
use crate::discovery::TopologySnapshot;
use crate::domain::{AddressScope, Addressable, Organization};
use crate::profile::{
    CertificateAuthorityEntry, ChannelEntry, ChannelPeer, ClientSection, ConnectionProfile,
    GrpcOptions, NodeSection, OrdererEntry, OrganizationEntry, PeerEntry, PemBlock, PemList,
    RegistrarEntry,
};

const GRPC_SCHEME: &str = "grpcs";
const CA_SCHEME: &str = "https";

/// One render of one request against one snapshot
pub struct Renderer<'a> {
    settings: &'a ProfileSettings,
    index: &'a OrganizationIndex,
    snapshot: &'a TopologySnapshot,
    request: &'a CompileRequest,
}

impl<'a> Renderer<'a> {
    pub fn new(
        settings: &'a ProfileSettings,
        index: &'a OrganizationIndex,
        snapshot: &'a TopologySnapshot,
        request: &'a CompileRequest,
    ) -> Self {
        Self {
            settings,
            index,
            snapshot,
            request,
        }
    }

    /// Build the full document
    pub fn render(&self) -> ConnectionProfile {
        self.warn_dangling_members();

        let orderers = self.orderers();
        let peers = self.peers();
        let channels = self.channels(&orderers, &peers);

        ConnectionProfile {
            name: self.settings.network_name.clone(),
            version: self.settings.version.clone(),
            client: ClientSection {
                organization: self.request.msp_id.to_string(),
            },
            organizations: self.organizations(),
            orderers,
            peers,
            certificate_authorities: self.certificate_authorities(),
            channels,
        }
    }

    fn scope(&self) -> AddressScope {
        self.request.scope
    }

    fn organizations(&self) -> BTreeMap<String, OrganizationEntry> {
        self.index
            .iter()
            .map(|org| (org.msp_id.to_string(), self.organization(org)))
            .collect()
    }

    fn organization(&self, org: &Organization) -> OrganizationEntry {
        OrganizationEntry {
            mspid: org.msp_id.to_string(),
            crypto_path: self.settings.crypto_path.clone(),
            users: BTreeMap::new(),
            peers: org.peers.iter().cloned().collect(),
            orderers: org.orderers.iter().cloned().collect(),
        }
    }

    fn orderers(&self) -> NodeSection<OrdererEntry> {
        let mut section = NodeSection::new();
        for node in &self.snapshot.orderer_nodes {
            let entry = OrdererEntry {
                url: url(GRPC_SCHEME, node, self.scope()),
                grpc_options: GrpcOptions::orderer(),
                tls_ca_certs: PemBlock {
                    pem: node.trusted_ca_cert().to_string(),
                },
            };
            if section.insert(node.name.clone(), entry).is_some() {
                warn!("Orderer {} discovered more than once, keeping last record", node.name);
            }
        }
        section
    }

    fn peers(&self) -> NodeSection<PeerEntry> {
        let mut section = NodeSection::new();
        for node in &self.snapshot.peer_nodes {
            let entry = PeerEntry {
                url: url(GRPC_SCHEME, node, self.scope()),
                grpc_options: GrpcOptions::peer(),
                tls_ca_certs: PemBlock {
                    pem: node.tls_ca_cert.clone().unwrap_or_default(),
                },
            };
            if section.insert(node.name.clone(), entry).is_some() {
                warn!("Peer {} discovered more than once, keeping last record", node.name);
            }
        }
        section
    }

    fn certificate_authorities(&self) -> NodeSection<CertificateAuthorityEntry> {
        let mut section = NodeSection::new();
        for ca in &self.snapshot.certificate_authorities {
            let entry = CertificateAuthorityEntry {
                url: url(CA_SCHEME, ca, self.scope()),
                registrar: ca.registrar().map(|registrar| RegistrarEntry {
                    enroll_id: registrar.enroll_id.clone(),
                    enroll_secret: registrar.enroll_secret.clone(),
                }),
                ca_name: self.settings.ca_name.clone(),
                tls_ca_certs: PemList {
                    pem: vec![ca.tls_cert.clone()],
                },
            };
            if section.insert(ca.name.clone(), entry).is_some() {
                warn!(
                    "Certificate authority {} discovered more than once, keeping last record",
                    ca.name
                );
            }
        }
        section
    }

    fn channels(
        &self,
        orderers: &NodeSection<OrdererEntry>,
        peers: &NodeSection<PeerEntry>,
    ) -> BTreeMap<String, ChannelEntry> {
        let channel = ChannelEntry {
            orderers: orderers.names().map(str::to_string).collect(),
            peers: peers
                .names()
                .map(|name| (name.to_string(), ChannelPeer::all_roles()))
                .collect::<IndexMap<_, _>>(),
        };
        BTreeMap::from([(self.settings.channel.clone(), channel)])
    }

    /// Membership names that have no record in the flat node lists
    fn warn_dangling_members(&self) {
        let peers: HashSet<&str> = self.snapshot.peer_nodes.iter().map(|n| n.name.as_str()).collect();
        let orderers: HashSet<&str> = self
            .snapshot
            .orderer_nodes
            .iter()
            .map(|n| n.name.as_str())
            .collect();

        for org in self.index.iter() {
            for name in org.peers.iter().filter(|name| !peers.contains(name.as_str())) {
                warn!("Organization {} references unknown peer {}", org.msp_id, name);
            }
            for name in org.orderers.iter().filter(|name| !orderers.contains(name.as_str())) {
                warn!("Organization {} references unknown orderer {}", org.msp_id, name);
            }
        }
    }
}

fn url(scheme: &str, node: &impl Addressable, scope: AddressScope) -> String {
    format!("{}://{}", scheme, node.address(scope))
}
