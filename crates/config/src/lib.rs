#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Configuration management for crdprep
//!
//! This crate handles loading and merging configuration from:
//! - Default values (hard-coded)
//! - Configuration file (~/.config/crdprep/config.toml)
//! - Environment variables
//! - CLI flags (applied by the caller)

pub mod constants;

use crdprep_errors::{ConfigError, Error};
use crdprep_types::DownloadPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathConfig,

    #[serde(default)]
    pub crds: CrdsConfig,

    #[serde(default)]
    pub network: NetworkConfig,
}

/// Path configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Base directory under which `cache/<hash>` entries live
    pub data_dir: Option<PathBuf>,
}

/// CRD source configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CrdsConfig {
    pub remote_url: Option<String>,
    #[serde(default)]
    pub download_policy: DownloadPolicy,
}

/// Network configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    #[serde(default = "default_timeout")]
    pub timeout: u64, // seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64, // seconds
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            connect_timeout: default_connect_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl NetworkConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout)
    }
}

fn default_timeout() -> u64 {
    300 // 5 minutes
}

fn default_connect_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("crdprep/{}", env!("CARGO_PKG_VERSION"))
}

fn read_error(path: &Path, err: &std::io::Error) -> ConfigError {
    if err.kind() == std::io::ErrorKind::NotFound {
        ConfigError::NotFound {
            path: path.display().to_string(),
        }
    } else {
        ConfigError::ReadFailed {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}

impl Config {
    /// Get the default config file path
    ///
    /// # Errors
    ///
    /// Returns an error if the system config directory cannot be determined.
    pub fn default_path() -> Result<PathBuf, Error> {
        let config_dir = dirs::config_dir().ok_or_else(|| ConfigError::NotFound {
            path: "config directory".to_string(),
        })?;
        Ok(config_dir
            .join(constants::APP_DIR_NAME)
            .join(constants::CONFIG_FILE_NAME))
    }

    /// Load configuration from file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the file contents
    /// contain invalid TOML syntax that cannot be parsed.
    pub async fn load_from_file(path: &Path) -> Result<Self, Error> {
        let contents = fs::read_to_string(path)
            .await
            .map_err(|e| read_error(path, &e))?;

        toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError {
                message: e.to_string(),
            })
            .map_err(Into::into)
    }

    /// Load configuration with fallback to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the default location cannot be checked, or if the
    /// file exists but cannot be read or contains invalid TOML syntax.
    pub async fn load() -> Result<Self, Error> {
        let Ok(config_path) = Self::default_path() else {
            return Ok(Self::default());
        };

        let exists = fs::try_exists(&config_path)
            .await
            .map_err(|e| read_error(&config_path, &e))?;
        if exists {
            tracing::debug!(path = %config_path.display(), "loading config file");
            Self::load_from_file(&config_path).await
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an optional path or use default
    ///
    /// An explicitly named file must exist; the default location may be absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed
    pub async fn load_or_default(path: Option<&Path>) -> Result<Self, Error> {
        match path {
            Some(config_path) => Self::load_from_file(config_path).await,
            None => Self::load().await,
        }
    }

    /// Merge with environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values
    /// that cannot be parsed into the expected types.
    pub fn merge_env(&mut self) -> Result<(), Error> {
        // CRDPREP_DATA_DIR
        if let Ok(dir) = std::env::var(constants::ENV_DATA_DIR) {
            if dir.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: constants::ENV_DATA_DIR.to_string(),
                    value: dir,
                }
                .into());
            }
            self.paths.data_dir = Some(PathBuf::from(dir));
        }

        // CRDPREP_CRDS_URL
        if let Ok(url) = std::env::var(constants::ENV_CRDS_URL) {
            self.crds.remote_url = Some(url);
        }

        // CRDPREP_DOWNLOAD_POLICY
        if let Ok(policy) = std::env::var(constants::ENV_DOWNLOAD_POLICY) {
            self.crds.download_policy =
                policy.parse().map_err(|_| ConfigError::InvalidValue {
                    field: constants::ENV_DOWNLOAD_POLICY.to_string(),
                    value: policy,
                })?;
        }

        // CRDPREP_NETWORK_TIMEOUT
        if let Ok(timeout) = std::env::var(constants::ENV_NETWORK_TIMEOUT) {
            self.network.timeout = timeout.parse().map_err(|_| ConfigError::InvalidValue {
                field: constants::ENV_NETWORK_TIMEOUT.to_string(),
                value: timeout,
            })?;
        }

        Ok(())
    }

    /// Get the data directory (with default)
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.paths.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir().map_or_else(
                || PathBuf::from(constants::FALLBACK_DATA_DIR),
                |dir| dir.join(constants::APP_DIR_NAME),
            )
        })
    }

    /// Get the CRD source URL
    ///
    /// # Errors
    ///
    /// Returns `MissingField` when no URL is configured.
    pub fn remote_url(&self) -> Result<&str, Error> {
        self.crds
            .remote_url
            .as_deref()
            .ok_or_else(|| {
                ConfigError::MissingField {
                    field: "crds.remote_url".to_string(),
                }
                .into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.crds.download_policy, DownloadPolicy::IfNotPresent);
        assert_eq!(config.network.timeout, 300);
        assert!(config.network.user_agent.starts_with("crdprep/"));
        assert!(config.remote_url().is_err());
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let mut config = Config::default();
        config.paths.data_dir = Some(PathBuf::from("/data"));
        assert_eq!(config.data_dir(), PathBuf::from("/data"));
    }

    #[test]
    fn test_partial_file_keeps_section_defaults() {
        let config: Config = toml::from_str(
            r#"
[crds]
remote_url = "https://example.com/crds.tar.gz"
"#,
        )
        .unwrap();
        assert_eq!(config.crds.download_policy, DownloadPolicy::IfNotPresent);
        assert_eq!(config.network.connect_timeout, 30);
        assert_eq!(
            config.remote_url().unwrap(),
            "https://example.com/crds.tar.gz"
        );
    }
}
