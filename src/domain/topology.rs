// Copyright (c) 2025 - Cowboy AI, Inc.
//! Discovered Topology Records
//!
//! Read-only value objects handed to the compiler by a discovery
//! collaborator. Organizations record membership by node name only; the
//! renderer resolves full node records from the flat node lists.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use super::MspId;

/// Which side of a node's endpoint pair a render uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressScope {
    /// Cluster-private endpoints, for clients running inside the cluster
    Internal,
    /// Publicly routable endpoints
    #[default]
    External,
}

impl AddressScope {
    /// Map the internal/external selector flag onto a scope
    pub fn from_internal(internal: bool) -> Self {
        if internal {
            AddressScope::Internal
        } else {
            AddressScope::External
        }
    }

    pub fn is_internal(self) -> bool {
        matches!(self, AddressScope::Internal)
    }
}

/// A node reachable through a private and a public endpoint
pub trait Addressable {
    /// Node name, unique within its kind
    fn name(&self) -> &str;

    /// Endpoint reachable from inside the cluster (`host:port`)
    fn private_url(&self) -> &str;

    /// Endpoint reachable from outside the cluster (`host:port`)
    fn public_url(&self) -> &str;

    /// Endpoint for the given scope
    fn address(&self, scope: AddressScope) -> &str {
        match scope {
            AddressScope::Internal => self.private_url(),
            AddressScope::External => self.public_url(),
        }
    }
}

/// Organization membership as reported by one discovery channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub msp_id: MspId,
    #[serde(default)]
    pub peers: IndexSet<String>,
    #[serde(default)]
    pub orderers: IndexSet<String>,
}

impl Organization {
    /// Create an organization with no members
    pub fn new(msp_id: MspId) -> Self {
        Self {
            msp_id,
            peers: IndexSet::new(),
            orderers: IndexSet::new(),
        }
    }

    pub fn with_peers<I, S>(mut self, peers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.peers.extend(peers.into_iter().map(Into::into));
        self
    }

    pub fn with_orderers<I, S>(mut self, orderers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.orderers.extend(orderers.into_iter().map(Into::into));
        self
    }

    /// Fold another record for the same identity into this one
    ///
    /// Membership sets are unioned; names already present keep their
    /// original position.
    pub fn absorb(&mut self, other: &Organization) {
        debug_assert_eq!(self.msp_id, other.msp_id);
        self.peers.extend(other.peers.iter().cloned());
        self.orderers.extend(other.orderers.iter().cloned());
    }
}

/// Peer node record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerNode {
    pub name: String,
    pub private_url: String,
    pub public_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_ca_cert: Option<String>,
}

impl Addressable for PeerNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn private_url(&self) -> &str {
        &self.private_url
    }

    fn public_url(&self) -> &str {
        &self.public_url
    }
}

/// Ordering node record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdererNode {
    pub name: String,
    pub private_url: String,
    pub public_url: String,
    pub tls_cert: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_ca_cert: Option<String>,
}

impl OrdererNode {
    /// Certificate clients should trust: the CA certificate when one was
    /// published, the node's own TLS certificate otherwise
    pub fn trusted_ca_cert(&self) -> &str {
        self.tls_ca_cert.as_deref().unwrap_or(&self.tls_cert)
    }
}

impl Addressable for OrdererNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn private_url(&self) -> &str {
        &self.private_url
    }

    fn public_url(&self) -> &str {
        &self.public_url
    }
}

/// CA-side enrollment credentials used to register new identities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registrar {
    pub enroll_id: String,
    pub enroll_secret: String,
}

/// Certificate authority record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateAuthority {
    pub name: String,
    pub private_url: String,
    pub public_url: String,
    pub tls_cert: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registrar: Option<Registrar>,
}

impl CertificateAuthority {
    /// Registrar credentials, if an enrollment identity is configured
    ///
    /// A registrar with an empty enrollment id counts as not configured.
    pub fn registrar(&self) -> Option<&Registrar> {
        self.registrar
            .as_ref()
            .filter(|registrar| !registrar.enroll_id.is_empty())
    }
}

impl Addressable for CertificateAuthority {
    fn name(&self) -> &str {
        &self.name
    }

    fn private_url(&self) -> &str {
        &self.private_url
    }

    fn public_url(&self) -> &str {
        &self.public_url
    }
}
