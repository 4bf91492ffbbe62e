// Copyright (c) 2025 - Cowboy AI, Inc.
//! Connection Profile Document
//!
//! Typed tree for the rendered client configuration. The document shape is
//! the compatibility surface read by Fabric-SDK-style clients:
//!
//! ```text
//! name / version
//! client.organization
//! organizations{}          (empty: {})
//! orderers{}               (empty: [])
//! peers{}                  (empty: [])
//! certificateAuthorities{} (empty: [])
//! channels._default{orderers[], peers{}}
//! ```
//!
//! Whether a section is written empty or left out is decided by the types
//! here, not by the renderer: collections are always written, and the only
//! optional block is a certificate authority's `registrar`.
//!
//! PEM text is emitted as literal block scalars at the emitter's nesting
//! depth. A certificate authority's `pem` list items sit at the same depth
//! as the key, so their blocks are indented 8 spaces, not 12.
//!
//! Plain scalars that YAML 1.1 parsers read as booleans (`yes`, `off`, ...)
//! are single-quoted on output so credentials and names survive those
//! parsers unchanged.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::{ProfileError, ProfileResult};

pub mod section;

pub use section::NodeSection;

/// Rendered connection profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionProfile {
    pub name: String,
    pub version: String,
    pub client: ClientSection,
    pub organizations: BTreeMap<String, OrganizationEntry>,
    pub orderers: NodeSection<OrdererEntry>,
    pub peers: NodeSection<PeerEntry>,
    pub certificate_authorities: NodeSection<CertificateAuthorityEntry>,
    pub channels: BTreeMap<String, ChannelEntry>,
}

impl ConnectionProfile {
    /// Emit the profile as YAML
    pub fn to_yaml(&self) -> ProfileResult<String> {
        Ok(quote_yaml11_booleans(&serde_yaml::to_string(self)?))
    }

    /// Parse a profile previously emitted with [`ConnectionProfile::to_yaml`]
    pub fn from_yaml(text: &str) -> ProfileResult<Self> {
        serde_yaml::from_str(text).map_err(|err| ProfileError::Parse(err.to_string()))
    }
}

/// Plain scalars read as booleans by YAML 1.1 but as strings by YAML 1.2
const YAML11_BOOLEANS: &[&str] = &[
    "y", "Y", "yes", "Yes", "YES", "n", "N", "no", "No", "NO", "on", "On", "ON", "off", "Off",
    "OFF",
];

/// Single-quote mapping values and sequence items that YAML 1.1 would
/// resolve to booleans. Literal block bodies are copied untouched.
fn quote_yaml11_booleans(yaml: &str) -> String {
    let mut out = String::with_capacity(yaml.len());
    let mut block_parent: Option<usize> = None;

    for line in yaml.split_inclusive('\n') {
        let body = line.trim_end_matches('\n');
        let content = body.trim_start();
        let indent = body.len() - content.len();

        if let Some(parent) = block_parent {
            if content.is_empty() || indent > parent {
                out.push_str(line);
                continue;
            }
            block_parent = None;
        }

        let (head, value) = split_scalar(body);
        if value.starts_with('|') || value.starts_with('>') {
            block_parent = Some(indent);
        }

        if YAML11_BOOLEANS.contains(&value) {
            out.push_str(head);
            out.push('\'');
            out.push_str(value);
            out.push('\'');
            if line.ends_with('\n') {
                out.push('\n');
            }
        } else {
            out.push_str(line);
        }
    }
    out
}

/// Split a line into everything before its scalar value and the value
fn split_scalar(line: &str) -> (&str, &str) {
    let mut start = line.len() - line.trim_start().len();
    while line[start..].starts_with("- ") {
        start += 2;
    }
    let rest = &line[start..];
    if !rest.starts_with(['\'', '"']) {
        if let Some(pos) = rest.find(": ") {
            start += pos + 2;
        }
    }
    line.split_at(start)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSection {
    pub organization: String,
}

/// Organization entry; peers and orderers are name references only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationEntry {
    pub mspid: String,
    pub crypto_path: String,
    pub users: BTreeMap<String, serde_yaml::Value>,
    pub peers: Vec<String>,
    pub orderers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrpcOptions {
    #[serde(
        rename = "hostnameOverride",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub hostname_override: Option<String>,
    #[serde(
        rename = "ssl-target-name-override",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub ssl_target_name_override: Option<String>,
    #[serde(rename = "allow-insecure")]
    pub allow_insecure: bool,
}

impl GrpcOptions {
    /// Options for ordering nodes: TLS required, no overrides
    pub fn orderer() -> Self {
        Self {
            hostname_override: None,
            ssl_target_name_override: None,
            allow_insecure: false,
        }
    }

    /// Options for peers: TLS required, override keys present but blank
    pub fn peer() -> Self {
        Self {
            hostname_override: Some(String::new()),
            ssl_target_name_override: Some(String::new()),
            allow_insecure: false,
        }
    }
}

/// Single PEM document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PemBlock {
    pub pem: String,
}

/// List of PEM documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PemList {
    pub pem: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdererEntry {
    pub url: String,
    pub grpc_options: GrpcOptions,
    #[serde(rename = "tlsCACerts")]
    pub tls_ca_certs: PemBlock,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeerEntry {
    pub url: String,
    pub grpc_options: GrpcOptions,
    #[serde(rename = "tlsCACerts")]
    pub tls_ca_certs: PemBlock,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrarEntry {
    pub enroll_id: String,
    pub enroll_secret: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateAuthorityEntry {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registrar: Option<RegistrarEntry>,
    pub ca_name: String,
    #[serde(rename = "tlsCACerts")]
    pub tls_ca_certs: PemList,
}

/// Channel membership; peers map to their participation roles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelEntry {
    pub orderers: Vec<String>,
    pub peers: IndexMap<String, ChannelPeer>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelPeer {
    pub discover: bool,
    pub endorsing_peer: bool,
    pub chaincode_query: bool,
    pub ledger_query: bool,
    pub event_source: bool,
}

impl ChannelPeer {
    /// A peer taking part in every channel role
    pub fn all_roles() -> Self {
        Self {
            discover: true,
            endorsing_peer: true,
            chaincode_query: true,
            ledger_query: true,
            event_source: true,
        }
    }
}
