// file: src/invocation/credentials.rs
// version: 1.0.0
// guid: fab74a86-9c6a-4f68-b8d2-1f8bb7a535a9

//! Basic authentication header encoding

use crate::config::ProvisioningConfig;
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Encode `username:password` with the standard base64 alphabet, padded
pub fn encode_basic_auth(username: &str, password: &str) -> String {
    STANDARD.encode(format!("{}:{}", username, password))
}

/// Encoded credentials, or `None` when basic auth is absent or disabled
pub fn header_value(config: &ProvisioningConfig) -> Option<String> {
    config
        .active_basic_auth()
        .map(|auth| encode_basic_auth(&auth.username, &auth.password))
}
