//! Driver connection parameters.
//!
//! Embedding applications usually deserialize [`DriverConfig`] from their
//! own inventory files; [`DriverConfig::from_yaml_str`] covers the common
//! YAML case.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use crate::{DriverError, DriverResult};

/// Connection parameters for a single device.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverConfig {
    /// Device hostname or IP address
    pub hostname: String,

    pub username: String,

    pub password: String,

    /// Connect timeout in seconds, handed to the vendor client
    #[serde(rename = "timeout", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Driver-specific extra arguments
    #[serde(default)]
    pub optional_args: BTreeMap<String, serde_json::Value>,
}

fn default_timeout_secs() -> u64 {
    60
}

impl DriverConfig {
    /// Creates a configuration with the default timeout and no extra arguments.
    pub fn new(
        hostname: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            hostname: hostname.into(),
            username: username.into(),
            password: password.into(),
            timeout_secs: default_timeout_secs(),
            optional_args: BTreeMap::new(),
        }
    }

    /// Parses and validates a YAML document.
    pub fn from_yaml_str(yaml: &str) -> DriverResult<Self> {
        let config: DriverConfig = serde_yaml::from_str(yaml)
            .map_err(|e| DriverError::invalid_config("document", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = timeout.as_secs();
        self
    }

    pub fn with_optional_arg(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.optional_args.insert(key.into(), value.into());
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Checks the fields a connection cannot be attempted without.
    pub fn validate(&self) -> DriverResult<()> {
        if self.hostname.trim().is_empty() {
            return Err(DriverError::invalid_config(
                "hostname",
                "must not be empty",
            ));
        }
        if self.timeout_secs == 0 {
            return Err(DriverError::invalid_config(
                "timeout",
                "must be at least one second",
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for DriverConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DriverConfig")
            .field("hostname", &self.hostname)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .field("optional_args", &self.optional_args)
            .finish()
    }
}
