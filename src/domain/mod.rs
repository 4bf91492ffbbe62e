// Copyright (c) 2025 - Cowboy AI, Inc.
//! Topology Domain Models
//!
//! Value objects describing a discovered network: organizations keyed by
//! MSP ID, and the peer, orderer and certificate authority records they
//! reference by name.
//!
//! - [`MspId`] - validated organization identity
//! - [`Organization`] - peer/orderer membership for one identity
//! - [`PeerNode`], [`OrdererNode`], [`CertificateAuthority`] - node records
//! - [`AddressScope`] - internal vs external endpoint selection

pub mod msp_id;
pub mod topology;

pub use msp_id::{MspId, MspIdError};
pub use topology::{
    AddressScope, Addressable, CertificateAuthority, Organization, OrdererNode, PeerNode,
    Registrar,
};
