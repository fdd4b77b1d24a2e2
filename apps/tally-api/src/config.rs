//! Tally API configuration module.
//!
//! Configuration is layered: built-in defaults, then an optional `tally.toml`
//! in the working directory, then `TALLY_*` environment variables.
//!
//! ```toml
//! # tally.toml
//! host = "127.0.0.1"
//! port = 8080
//! retailer_policy = "strict"   # strict | lenient
//! max_body_bytes = 2097152
//! ```

use std::net::SocketAddr;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use tally_core::RetailerPolicy;

/// Config file looked up next to the binary's working directory.
pub const CONFIG_FILE: &str = "tally";

/// Environment variable prefix (`TALLY_PORT`, `TALLY_RETAILER_POLICY`, ...).
pub const ENV_PREFIX: &str = "TALLY";

/// Tally API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Interface to bind
    pub host: String,

    /// HTTP port
    pub port: u16,

    /// Which retailer names the validator accepts
    pub retailer_policy: RetailerPolicy,

    /// Largest accepted request body in bytes
    pub max_body_bytes: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
            retailer_policy: RetailerPolicy::default(),
            max_body_bytes: 2 * 1024 * 1024,
        }
    }
}

impl ApiConfig {
    /// Load configuration from `tally.toml` (if present) and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(CONFIG_FILE)
    }

    /// Same as [`ApiConfig::load`] with a different config file stem.
    pub fn load_from(file: &str) -> Result<Self, ConfigError> {
        let config: ApiConfig = Self::builder()?
            .add_source(File::with_name(file).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Builder pre-seeded with the defaults.
    fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let defaults = ApiConfig::default();

        Ok(Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("retailer_policy", defaults.retailer_policy.to_string())?
            .set_default("max_body_bytes", defaults.max_body_bytes as i64)?)
    }

    /// Address the server binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidValue("host".to_string()))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_body_bytes == 0 {
            return Err(ConfigError::InvalidValue("max_body_bytes".to_string()));
        }

        self.socket_addr()?;
        Ok(())
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
