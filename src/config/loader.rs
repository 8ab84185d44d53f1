// file: src/config/loader.rs
// version: 1.0.0
// guid: ec6b7c9d-483b-45c6-8b26-286a8dcff705

//! Configuration file loading and environment variable substitution

use super::ProvisioningConfig;
use crate::error::ImportError;
use crate::Result;
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Serialization format of a configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

impl ConfigFormat {
    /// Pick the format from the file extension, defaulting to YAML
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => ConfigFormat::Json,
            Some("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Yaml,
        }
    }
}

/// Configuration loader with environment variable substitution
pub struct ConfigLoader {
    env_vars: HashMap<String, String>,
}

impl ConfigLoader {
    /// Create a new config loader seeded from the process environment
    pub fn new() -> Self {
        Self {
            env_vars: std::env::vars().collect(),
        }
    }

    /// Create a loader that only knows the given variables
    pub fn with_env_vars(env_vars: HashMap<String, String>) -> Self {
        Self { env_vars }
    }

    /// Load provisioning configuration from a YAML, JSON or TOML file
    pub fn load_provisioning_config<P: AsRef<Path>>(&self, path: P) -> Result<ProvisioningConfig> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ImportError::config(format!(
                "Failed to read provisioning config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let format = ConfigFormat::from_path(path);
        debug!("Loading {:?} configuration from {}", format, path.display());
        self.parse_provisioning_config(&content, format)
    }

    /// Parse provisioning configuration from already loaded content
    pub fn parse_provisioning_config(
        &self,
        content: &str,
        format: ConfigFormat,
    ) -> Result<ProvisioningConfig> {
        let expanded = self.expand_env_vars(content)?;
        let config: ProvisioningConfig = match format {
            ConfigFormat::Yaml => serde_yaml::from_str(&expanded)?,
            ConfigFormat::Json => serde_json::from_str(&expanded)?,
            ConfigFormat::Toml => toml::from_str(&expanded)?,
        };
        Ok(config)
    }

    /// Expand `${VAR}` placeholders in configuration content
    fn expand_env_vars(&self, content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| ImportError::config(format!("Invalid regex pattern: {}", e)))?;

        let mut missing_vars = Vec::new();
        let result = re.replace_all(content, |caps: &regex::Captures| {
            match self.env_vars.get(&caps[1]) {
                Some(value) => value.clone(),
                None => {
                    if !missing_vars.contains(&caps[1].to_string()) {
                        missing_vars.push(caps[1].to_string());
                    }
                    String::new()
                }
            }
        });

        if !missing_vars.is_empty() {
            return Err(ImportError::config(format!(
                "Missing environment variables: {}",
                missing_vars.join(", ")
            )));
        }

        Ok(result.into_owned())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
