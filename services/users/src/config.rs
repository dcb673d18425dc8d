//! Server configuration

use std::io;
use std::net::{Ipv4Addr, SocketAddr};

use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;

/// Errors that can occur while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("reading config from {path}")]
    Io {
        /// Path of the configuration file
        path: Utf8PathBuf,
        /// Underlying IO error
        source: io::Error,
    },

    /// The configuration file is not valid TOML for this service
    #[error("parsing config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Configuration for the users server
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind: SocketAddr,

    /// Log filter used when `RUST_LOG` is not set
    pub log: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8080)),
            log: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Parse configuration from a TOML document
    pub fn from_toml(document: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(document)?)
    }

    /// Read configuration from a TOML file
    pub async fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let document = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(%path, "Loaded config");
        Self::from_toml(&document)
    }
}
