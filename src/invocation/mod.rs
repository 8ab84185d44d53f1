// file: src/invocation/mod.rs
// version: 1.0.0
// guid: 63f6c9b5-e158-4ac4-b0e6-493c1b048e1b

//! Initializer command derivation
//!
//! Turns a [`ProvisioningConfig`] into the argument list handed to the
//! initializer. Nothing here touches the filesystem or spawns processes.

pub mod credentials;

use crate::config::ProvisioningConfig;
use serde::Serialize;
use std::fmt;

const REDACTED: &str = "****";

/// Transport used to reach the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Http,
    Https,
}

impl Protocol {
    /// Get the protocol as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Arguments for a single initializer run
#[derive(Clone, PartialEq, Eq)]
pub struct InvocationCommand {
    pub address: String,
    pub protocol: Protocol,
    pub port: u16,
    /// Base64 `username:password`, present only when basic auth is enabled
    pub auth_header: Option<String>,
    pub debug: bool,
}

impl InvocationCommand {
    /// Derive the command from provisioning configuration
    pub fn from_config(config: &ProvisioningConfig) -> Self {
        let (protocol, port) = if config.use_https {
            (Protocol::Https, config.https_port)
        } else {
            (Protocol::Http, config.http_port)
        };

        Self {
            address: config.endpoint_address.clone(),
            protocol,
            port,
            auth_header: credentials::header_value(config),
            debug: config.debug,
        }
    }

    /// Endpoint arguments: `-i <address> -p <port>` plus `--https` when needed
    pub fn endpoint_args(&self) -> Vec<String> {
        let mut args = vec![
            "-i".to_string(),
            self.address.clone(),
            "-p".to_string(),
            self.port.to_string(),
        ];
        if self.protocol == Protocol::Https {
            args.push("--https".to_string());
        }
        args
    }

    /// Header argument slot.
    ///
    /// `--header <value>` when credentials are enabled, otherwise a single
    /// empty argument so the positional layout stays the same.
    pub fn header_args(&self) -> Vec<String> {
        match &self.auth_header {
            Some(value) => vec!["--header".to_string(), value.clone()],
            None => vec![String::new()],
        }
    }

    /// Full argument list passed to the initializer
    pub fn args(&self) -> Vec<String> {
        let mut args = self.endpoint_args();
        if self.debug {
            args.push("--debug".to_string());
        }
        args.extend(self.header_args());
        args
    }

    /// Arguments safe to log or print, with the credential value masked
    pub fn redacted_args(&self) -> Vec<String> {
        let mut args = self.args();
        if self.auth_header.is_some() {
            if let Some(last) = args.last_mut() {
                *last = REDACTED.to_string();
            }
        }
        args
    }

    /// Shell-like rendering of `program` followed by `args`
    pub fn render(program: &str, args: &[String]) -> String {
        let mut line = String::from(program);
        for arg in args {
            line.push(' ');
            if arg.is_empty() {
                line.push_str("''");
            } else {
                line.push_str(arg);
            }
        }
        line
    }
}

impl fmt::Debug for InvocationCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvocationCommand")
            .field("address", &self.address)
            .field("protocol", &self.protocol)
            .field("port", &self.port)
            .field("auth_header", &self.auth_header.as_ref().map(|_| REDACTED))
            .field("debug", &self.debug)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BasicAuthConfig;

    fn base_config() -> ProvisioningConfig {
        ProvisioningConfig::new("10.0.0.5", 8080, 8443)
    }

    #[test]
    fn test_http_uses_http_port_without_flag() {
        let command = InvocationCommand::from_config(&base_config());
        assert_eq!(command.protocol, Protocol::Http);
        assert_eq!(command.port, 8080);
        assert!(!command.args().contains(&"--https".to_string()));
    }

    #[test]
    fn test_https_uses_https_port_with_flag() {
        let command = InvocationCommand::from_config(&base_config().with_https(true));
        assert_eq!(command.protocol, Protocol::Https);
        assert_eq!(command.port, 8443);
        assert_eq!(
            command.endpoint_args(),
            vec!["-i", "10.0.0.5", "-p", "8443", "--https"]
        );
    }

    #[test]
    fn test_reference_example_arguments() {
        let config = base_config().with_basic_auth(BasicAuthConfig::new("admin", "secret"));
        let command = InvocationCommand::from_config(&config);
        assert_eq!(
            command.args(),
            vec!["-i", "10.0.0.5", "-p", "8080", "--header", "YWRtaW46c2VjcmV0"]
        );
    }

    #[test]
    fn test_absent_auth_leaves_empty_header_argument() {
        let command = InvocationCommand::from_config(&base_config());
        assert_eq!(command.auth_header, None);
        assert_eq!(command.header_args(), vec![String::new()]);
        assert_eq!(command.args(), vec!["-i", "10.0.0.5", "-p", "8080", ""]);
    }

    #[test]
    fn test_disabled_auth_leaves_empty_header_argument() {
        let mut auth = BasicAuthConfig::new("admin", "secret");
        auth.enabled = false;
        let command = InvocationCommand::from_config(&base_config().with_basic_auth(auth));
        assert_eq!(command.header_args(), vec![String::new()]);
    }

    #[test]
    fn test_debug_flag_precedes_header() {
        let config = base_config()
            .with_https(true)
            .with_debug(true)
            .with_basic_auth(BasicAuthConfig::new("a", "b"));
        let command = InvocationCommand::from_config(&config);
        assert_eq!(
            command.args(),
            vec!["-i", "10.0.0.5", "-p", "8443", "--https", "--debug", "--header", "YTpi"]
        );
    }

    #[test]
    fn test_redaction_hides_credentials() {
        let config = base_config().with_basic_auth(BasicAuthConfig::new("admin", "secret"));
        let command = InvocationCommand::from_config(&config);

        let redacted = command.redacted_args();
        assert_eq!(redacted.last().map(String::as_str), Some("****"));
        assert!(!format!("{:?}", command).contains("YWRtaW46c2VjcmV0"));

        let plain = InvocationCommand::from_config(&base_config());
        assert_eq!(plain.redacted_args(), plain.args());
    }

    #[test]
    fn test_render_quotes_empty_arguments() {
        let command = InvocationCommand::from_config(&base_config());
        assert_eq!(
            InvocationCommand::render("sdcinit", &command.args()),
            "sdcinit -i 10.0.0.5 -p 8080 ''"
        );
    }
}
