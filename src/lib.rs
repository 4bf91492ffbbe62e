//! Connection profile compiler for permissioned blockchain networks
//!
//! Turns discovered cluster topology (organizations, ordering nodes, peers
//! and certificate authorities) into a ready-to-use client connection
//! profile for one organization.

pub mod compiler;
pub mod config;
pub mod discovery;
pub mod domain;
pub mod errors;
pub mod profile;
pub mod service;

// Re-export commonly used types
pub use compiler::{CompileRequest, OrganizationIndex, ProfileCompiler};
pub use config::ProfileSettings;
pub use discovery::{DiscoveryError, SnapshotSource, TopologySnapshot, TopologySource};
pub use domain::{AddressScope, MspId};
pub use errors::{ProfileError, ProfileResult};
pub use profile::ConnectionProfile;
pub use service::{ConnectionProfileService, NetworkConfigService};
