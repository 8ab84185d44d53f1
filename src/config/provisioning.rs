// file: src/config/provisioning.rs
// version: 1.0.0
// guid: 880e8c6d-773d-42ae-9b91-571fed056965

//! Provisioning configuration structures

use serde::Deserialize;
use std::fmt;

/// Inputs describing the backend endpoint the normatives are imported into
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisioningConfig {
    /// Backend host identifier (IP address or hostname)
    #[serde(alias = "be_ip")]
    pub endpoint_address: String,
    /// Talk to the backend over HTTPS instead of HTTP
    #[serde(default, alias = "disableHttp")]
    pub use_https: bool,
    /// Backend HTTP port
    #[serde(alias = "http_port")]
    pub http_port: u16,
    /// Backend HTTPS port
    #[serde(alias = "https_port")]
    pub https_port: u16,
    /// Optional basic authentication for the backend
    #[serde(default, alias = "basic_auth")]
    pub basic_auth: Option<BasicAuthConfig>,
    /// Pass `--debug` to the initializer
    #[serde(default)]
    pub debug: bool,
}

/// Basic authentication credentials
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct BasicAuthConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, alias = "user_name")]
    pub username: String,
    #[serde(default, alias = "user_pass")]
    pub password: String,
}

impl BasicAuthConfig {
    /// Create enabled credentials
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            enabled: true,
            username: username.into(),
            password: password.into(),
        }
    }

    /// Credentials that are configured but switched off
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            username: String::new(),
            password: String::new(),
        }
    }
}

impl fmt::Debug for BasicAuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuthConfig")
            .field("enabled", &self.enabled)
            .field("username", &self.username)
            .field("password", &"****")
            .finish()
    }
}

impl ProvisioningConfig {
    /// Plain HTTP configuration without authentication
    pub fn new(endpoint_address: impl Into<String>, http_port: u16, https_port: u16) -> Self {
        Self {
            endpoint_address: endpoint_address.into(),
            use_https: false,
            http_port,
            https_port,
            basic_auth: None,
            debug: false,
        }
    }

    /// Switch the configuration to HTTPS
    pub fn with_https(mut self, use_https: bool) -> Self {
        self.use_https = use_https;
        self
    }

    /// Attach basic authentication
    pub fn with_basic_auth(mut self, auth: BasicAuthConfig) -> Self {
        self.basic_auth = Some(auth);
        self
    }

    /// Enable initializer debug output
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Credentials to send, if any are configured and enabled
    pub fn active_basic_auth(&self) -> Option<&BasicAuthConfig> {
        self.basic_auth.as_ref().filter(|auth| auth.enabled)
    }
}
