// Copyright (c) 2025 - Cowboy AI, Inc.
//! Connection Profile Compiler
//!
//! Pure, synchronous transform from topology facts plus one organization
//! identity to a connection profile.
//!
//! ```text
//! TopologySnapshot ─┬─> OrganizationIndex::resolve ──> Renderer::render ──> ConnectionProfile
//! CompileRequest ───┘        (merge + lookup)            (typed tree)
//! ```
//!
//! An unknown identity stops the compile before anything is rendered.
//!
//! # Example
//!
//! ```rust
//! use hlf_connection_profile::compiler::{CompileRequest, ProfileCompiler};
//! use hlf_connection_profile::discovery::TopologySnapshot;
//! use hlf_connection_profile::domain::{MspId, Organization};
//!
//! let snapshot = TopologySnapshot {
//!     peer_organizations: vec![Organization::new(MspId::new("Org1MSP").unwrap())],
//!     ..Default::default()
//! };
//! let request = CompileRequest::new(MspId::new("Org1MSP").unwrap());
//!
//! let yaml = ProfileCompiler::default().compile_to_yaml(&snapshot, &request).unwrap();
//! assert!(yaml.contains("organization: Org1MSP"));
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ProfileSettings;
use crate::discovery::TopologySnapshot;
use crate::domain::{AddressScope, MspId};
use crate::errors::ProfileResult;
use crate::profile::ConnectionProfile;

pub mod index;
pub mod render;

pub use index::OrganizationIndex;
pub use render::Renderer;

/// Which organization to render for, and which endpoints to use
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileRequest {
    pub msp_id: MspId,
    #[serde(default)]
    pub scope: AddressScope,
}

impl CompileRequest {
    /// Request for `msp_id` using public endpoints
    pub fn new(msp_id: MspId) -> Self {
        Self {
            msp_id,
            scope: AddressScope::External,
        }
    }

    /// Select private (`true`) or public (`false`) endpoints
    pub fn with_internal(mut self, internal: bool) -> Self {
        self.scope = AddressScope::from_internal(internal);
        self
    }

    pub fn with_scope(mut self, scope: AddressScope) -> Self {
        self.scope = scope;
        self
    }
}

/// Compiles snapshots into connection profiles
///
/// Holds only immutable settings, so one compiler can serve any number of
/// concurrent compiles.
#[derive(Debug, Clone, Default)]
pub struct ProfileCompiler {
    settings: ProfileSettings,
}

impl ProfileCompiler {
    pub fn new(settings: ProfileSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ProfileSettings {
        &self.settings
    }

    /// Build the profile tree for `request`
    pub fn compile(
        &self,
        snapshot: &TopologySnapshot,
        request: &CompileRequest,
    ) -> ProfileResult<ConnectionProfile> {
        let index = OrganizationIndex::resolve(
            &snapshot.orderer_organizations,
            &snapshot.peer_organizations,
            &request.msp_id,
        )?;

        let profile = Renderer::new(&self.settings, &index, snapshot, request).render();

        debug!(
            msp_id = %request.msp_id,
            scope = ?request.scope,
            organizations = profile.organizations.len(),
            orderers = profile.orderers.len(),
            peers = profile.peers.len(),
            cas = profile.certificate_authorities.len(),
            "Rendered connection profile"
        );

        Ok(profile)
    }

    /// Build the profile for `request` and emit it as YAML
    pub fn compile_to_yaml(
        &self,
        snapshot: &TopologySnapshot,
        request: &CompileRequest,
    ) -> ProfileResult<String> {
        self.compile(snapshot, request)?.to_yaml()
    }
}
