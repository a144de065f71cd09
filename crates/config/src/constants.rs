//! Fixed names and fallbacks shared by the configuration layer

/// Used when the platform has no user data directory
pub const FALLBACK_DATA_DIR: &str = "/var/lib/crdprep";

/// Directory name under the platform data/config directories
pub const APP_DIR_NAME: &str = "crdprep";

pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const ENV_DATA_DIR: &str = "CRDPREP_DATA_DIR";
pub const ENV_CRDS_URL: &str = "CRDPREP_CRDS_URL";
pub const ENV_DOWNLOAD_POLICY: &str = "CRDPREP_DOWNLOAD_POLICY";
pub const ENV_NETWORK_TIMEOUT: &str = "CRDPREP_NETWORK_TIMEOUT";
