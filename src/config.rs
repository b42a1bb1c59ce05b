//! Service configuration.
//!
//! Listen address and archive root are explicit values handed to the server
//! at construction; nothing here is process-wide state.

use crate::constants::{DEFAULT_DATA_DIR_NAME, DEFAULT_LISTEN_ADDR};
use crate::error::{ArchiveError, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration for the HTTP service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address the HTTP listener binds to
    pub listen_addr: SocketAddr,

    /// Archive root holding the `YYYYMMDD/HHMMSS.payments` tree
    pub data_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            data_dir: default_data_dir(),
        }
    }
}

impl ServerConfig {
    /// Set the listen address
    pub fn with_listen_addr(mut self, listen_addr: SocketAddr) -> Self {
        self.listen_addr = listen_addr;
        self
    }

    /// Set the archive root
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Check that the archive root exists and is a directory
    pub fn validate(&self) -> Result<()> {
        validate_data_dir(&self.data_dir)?;
        debug!("Validated configuration: {:?}", self);
        Ok(())
    }
}

/// `0.0.0.0:9999`
pub fn default_listen_addr() -> SocketAddr {
    DEFAULT_LISTEN_ADDR
        .parse()
        .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], 9999)))
}

/// `data` under the current working directory, or relative `data` if the
/// working directory cannot be determined
pub fn default_data_dir() -> PathBuf {
    std::env::current_dir()
        .map(|cwd| cwd.join(DEFAULT_DATA_DIR_NAME))
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR_NAME))
}

fn validate_data_dir(data_dir: &Path) -> Result<()> {
    if !data_dir.exists() {
        return Err(ArchiveError::configuration(format!(
            "Data directory does not exist: {}",
            data_dir.display()
        )));
    }

    if !data_dir.is_dir() {
        return Err(ArchiveError::configuration(format!(
            "Data directory is not a directory: {}",
            data_dir.display()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_legacy_service() {
        let config = ServerConfig::default();
        assert_eq!(config.listen_addr.port(), 9999);
        assert!(config.listen_addr.ip().is_unspecified());
        assert!(config.data_dir.ends_with("data"));
    }

    #[test]
    fn test_builder_overrides() {
        let addr: SocketAddr = "127.0.0.1:8080".parse().unwrap();
        let config = ServerConfig::default()
            .with_listen_addr(addr)
            .with_data_dir("/srv/payments");

        assert_eq!(config.listen_addr, addr);
        assert_eq!(config.data_dir, PathBuf::from("/srv/payments"));
    }

    #[test]
    fn test_validate_rejects_missing_and_non_directory() {
        let temp_dir = TempDir::new().unwrap();

        let missing = ServerConfig::default().with_data_dir(temp_dir.path().join("missing"));
        assert!(matches!(
            missing.validate(),
            Err(ArchiveError::Configuration { .. })
        ));

        let file_path = temp_dir.path().join("file");
        std::fs::write(&file_path, "x").unwrap();
        let not_dir = ServerConfig::default().with_data_dir(&file_path);
        assert!(matches!(
            not_dir.validate(),
            Err(ArchiveError::Configuration { .. })
        ));

        let ok = ServerConfig::default().with_data_dir(temp_dir.path());
        assert!(ok.validate().is_ok());
    }
}
