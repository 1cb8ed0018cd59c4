//! Shim configuration describing where assets live and how the native side is addressed.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::metadata::StaticMetadata;

/// File name searched for by [`ShimConfig::discover`].
pub const DEFAULT_CONFIG_FILE: &str = "asset_bootstrap.config.json";

/// Errors raised when loading an explicitly requested configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that caused the error.
        path: PathBuf,
        /// Source I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Failed to parse the JSON configuration.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        /// Path that caused the error.
        path: PathBuf,
        /// Source parse error.
        #[source]
        source: serde_json::Error,
    },
}

/// Layout and package details used when preparing the engine launch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShimConfig {
    /// Directory holding the bundled assets, relative to the configuration directory.
    pub asset_root: String,
    /// Folder created under the documents directory for user data.
    pub app_folder_name: String,
    /// Explicit external storage path, bypassing documents directory resolution.
    pub external_storage_dir: Option<String>,
    /// Package version code reported to the engine.
    pub version_code: Option<i64>,
    /// Package version name reported to the engine.
    pub version_name: Option<String>,
    /// File name used when the manifest is written out for inspection.
    pub manifest_json: String,
}

impl Default for ShimConfig {
    fn default() -> Self {
        Self {
            asset_root: "assets".into(),
            app_folder_name: "TheForceEngine".into(),
            external_storage_dir: None,
            version_code: None,
            version_name: None,
            manifest_json: "asset_manifest.json".into(),
        }
    }
}

impl ShimConfig {
    /// Load configuration from `dir`, falling back to defaults.
    ///
    /// A missing or malformed file is not fatal here; the launch proceeds with defaults and the
    /// problem is logged.
    pub fn discover(dir: &Path) -> Self {
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if !candidate.exists() {
            return Self::default();
        }
        Self::load(&candidate).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring configuration, using defaults");
            Self::default()
        })
    }

    /// Read configuration from a specific JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Asset root resolved against the directory the configuration belongs to.
    pub fn asset_root_path(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.asset_root)
    }

    /// Package metadata carried by this configuration.
    pub fn metadata(&self) -> StaticMetadata {
        StaticMetadata {
            version_code: self.version_code,
            version_name: self.version_name.clone(),
        }
    }
}
