// Copyright (c) 2025 - Cowboy AI, Inc.
//! Connection profile service
//!
//! Each call is one transaction:
//! 1. Fetch a fresh topology snapshot from the injected source
//! 2. Merge organizations and check the requested identity
//! 3. Render the profile tree
//! 4. Emit YAML (for the `_yaml` variants)
//!
//! If any step fails the whole call fails; nothing partial is returned.

use async_trait::async_trait;
use tracing::{info, Instrument};
use uuid::Uuid;

use crate::compiler::{CompileRequest, ProfileCompiler};
use crate::config::ProfileSettings;
use crate::discovery::{TopologySnapshot, TopologySource};
use crate::domain::MspId;
use crate::errors::{ProfileError, ProfileResult};
use crate::profile::ConnectionProfile;

/// Application service producing connection profiles from live topology
#[async_trait]
pub trait NetworkConfigService: Send + Sync {
    /// Fetch topology from `source` and compile the profile for `request`
    async fn network_config(
        &self,
        source: &dyn TopologySource,
        request: &CompileRequest,
    ) -> ProfileResult<ConnectionProfile>;

    /// Same as [`NetworkConfigService::network_config`], emitted as YAML
    async fn network_config_yaml(
        &self,
        source: &dyn TopologySource,
        request: &CompileRequest,
    ) -> ProfileResult<String> {
        self.network_config(source, request).await?.to_yaml()
    }

    /// Compile from raw caller input
    ///
    /// A malformed `msp_id` is rejected before discovery is contacted.
    async fn network_config_for(
        &self,
        source: &dyn TopologySource,
        msp_id: &str,
        internal: bool,
    ) -> ProfileResult<String> {
        let request = CompileRequest::new(MspId::new(msp_id)?).with_internal(internal);
        self.network_config_yaml(source, &request).await
    }
}

/// [`NetworkConfigService`] backed by a [`ProfileCompiler`]
#[derive(Debug, Clone, Default)]
pub struct ConnectionProfileService {
    compiler: ProfileCompiler,
}

impl ConnectionProfileService {
    pub fn new(settings: ProfileSettings) -> Self {
        Self {
            compiler: ProfileCompiler::new(settings),
        }
    }

    pub fn compiler(&self) -> &ProfileCompiler {
        &self.compiler
    }
}

#[async_trait]
impl NetworkConfigService for ConnectionProfileService {
    async fn network_config(
        &self,
        source: &dyn TopologySource,
        request: &CompileRequest,
    ) -> ProfileResult<ConnectionProfile> {
        let compile_id = Uuid::now_v7();
        let span = tracing::info_span!(
            "network_config",
            %compile_id,
            msp_id = %request.msp_id,
            internal = request.scope.is_internal()
        );

        async move {
            let snapshot = TopologySnapshot::fetch(source).await?;
            let profile = self.compiler.compile(&snapshot, request)?;

            info!(
                organizations = profile.organizations.len(),
                peers = profile.peers.len(),
                orderers = profile.orderers.len(),
                "Compiled connection profile"
            );
            Ok::<_, ProfileError>(profile)
        }
        .instrument(span)
        .await
    }
}
