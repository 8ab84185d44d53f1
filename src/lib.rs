// file: src/lib.rs
// version: 1.0.0
// guid: 34809a0b-1433-4df9-a7fb-d9ad5643050a

//! # Normatives Import Agent
//!
//! Deploys the catalog normatives archive on a backend host, extracts it and
//! runs the initializer against the backend over HTTP or HTTPS, optionally
//! with basic authentication. The initializer's exit code is the outcome.

pub mod archive;
pub mod cli;
pub mod config;
pub mod error;
pub mod executor;
pub mod importer;
pub mod invocation;
pub mod logging;

pub use config::{BasicAuthConfig, ImportPaths, ProvisioningConfig};
pub use error::{ImportError, Result};
pub use importer::{ExecutionResult, ImportInvoker};
pub use invocation::{InvocationCommand, Protocol};

/// Version information for the agent
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
