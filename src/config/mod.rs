// file: src/config/mod.rs
// version: 1.0.0
// guid: 1417f342-ff59-45c3-a4f2-29e7fefa929f

//! Configuration module for the normatives import agent
//!
//! Holds the provisioning inputs supplied by the orchestration layer and the
//! well-known filesystem locations the import works against.

pub mod loader;
pub mod paths;
pub mod provisioning;

pub use paths::ImportPaths;
pub use provisioning::{BasicAuthConfig, ProvisioningConfig};
