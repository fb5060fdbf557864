//! Relay configuration module
//!
//! Provides the configuration for the relay process, loaded from the
//! environment with fixed defaults.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

/// Default listening port
pub const DEFAULT_PORT: u16 = 4000;
/// Default directory holding `messages.json`
pub const DEFAULT_DATA_DIR: &str = "data";
/// Default request / WebSocket message size limit (attachments are inline)
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Relay configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    /// Address to bind
    pub host: IpAddr,
    /// Port to bind
    pub port: u16,
    /// Directory holding the message log
    pub data_dir: PathBuf,
    /// Largest accepted request body or WebSocket message
    pub max_body_bytes: usize,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl RelayConfig {
    /// Create a new RelayConfigBuilder
    pub fn builder() -> RelayConfigBuilder {
        RelayConfigBuilder::default()
    }

    /// Load configuration from environment variables
    ///
    /// Reads `BACKEND_PORT`, `BIND_HOST`, `DATA_DIR` and `MAX_BODY_BYTES`;
    /// unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = Self::builder();

        if let Ok(port) = std::env::var("BACKEND_PORT") {
            let port = port
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue("BACKEND_PORT", port))?;
            builder = builder.port(port);
        }
        if let Ok(host) = std::env::var("BIND_HOST") {
            let host = host
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidValue("BIND_HOST", host))?;
            builder = builder.host(host);
        }
        if let Ok(dir) = std::env::var("DATA_DIR") {
            builder = builder.data_dir(dir);
        }
        if let Ok(limit) = std::env::var("MAX_BODY_BYTES") {
            let limit = limit
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidValue("MAX_BODY_BYTES", limit))?;
            builder = builder.max_body_bytes(limit);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidValue("BACKEND_PORT", "0".to_string()));
        }
        if self.max_body_bytes == 0 {
            return Err(ConfigError::InvalidValue("MAX_BODY_BYTES", "0".to_string()));
        }
        if self.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::MissingValue("DATA_DIR"));
        }
        Ok(())
    }

    /// Socket address the relay listens on
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Builder for RelayConfig
#[derive(Debug, Default)]
pub struct RelayConfigBuilder {
    host: Option<IpAddr>,
    port: Option<u16>,
    data_dir: Option<PathBuf>,
    max_body_bytes: Option<usize>,
}

impl RelayConfigBuilder {
    /// Set the bind address
    pub fn host(mut self, host: IpAddr) -> Self {
        self.host = Some(host);
        self
    }

    /// Set the listening port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the data directory
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Set the body size limit
    pub fn max_body_bytes(mut self, limit: usize) -> Self {
        self.max_body_bytes = Some(limit);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<RelayConfig, ConfigError> {
        let defaults = RelayConfig::default();
        let config = RelayConfig {
            host: self.host.unwrap_or(defaults.host),
            port: self.port.unwrap_or(defaults.port),
            data_dir: self.data_dir.unwrap_or(defaults.data_dir),
            max_body_bytes: self.max_body_bytes.unwrap_or(defaults.max_body_bytes),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {0}: {1:?}")]
    InvalidValue(&'static str, String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}
