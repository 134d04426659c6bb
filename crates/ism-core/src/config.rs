//! # Configuration
//!
//! `IsmConfig` says where vocabulary resources live and whether vocabulary
//! mismatches are errors or warnings. It is read from a YAML file, then
//! environment overrides are applied on top.
//!
//! Variables:
//! - `ISM_CVE_ROOT` (default: `cve`)
//! - `ISM_CVE_CUSTOM_LOCATION` (default: unset)
//! - `ISM_CVE_VALIDATION_AS_ERRORS` (default: `true`)
//!
//! ```yaml
//! cve_root: /opt/ism/cve
//! version_locations:
//!   "4.1": /opt/ism/cve-4.1-patched
//! validation_as_errors: false
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::policy::ResourceLocations;
use crate::version::DdmsVersion;
use crate::xs;

pub const ENV_CVE_ROOT: &str = "ISM_CVE_ROOT";
pub const ENV_CUSTOM_LOCATION: &str = "ISM_CVE_CUSTOM_LOCATION";
pub const ENV_VALIDATION_AS_ERRORS: &str = "ISM_CVE_VALIDATION_AS_ERRORS";

/// Settings for a validation session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IsmConfig {
    /// Base directory holding one subdirectory per DDMS version.
    pub cve_root: PathBuf,
    /// Single directory used for every version when set.
    pub custom_location: Option<PathBuf>,
    /// Per-version directory overrides.
    pub version_locations: BTreeMap<DdmsVersion, PathBuf>,
    /// Whether vocabulary mismatches abort construction.
    pub validation_as_errors: bool,
}

impl Default for IsmConfig {
    fn default() -> Self {
        Self {
            cve_root: PathBuf::from("cve"),
            custom_location: None,
            version_locations: BTreeMap::new(),
            validation_as_errors: true,
        }
    }
}

impl IsmConfig {
    /// Reads a YAML config file. Environment overrides are not applied.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_yaml::from_str(&content).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded ISM configuration");
        Ok(config)
    }

    /// Defaults, or the given file, with environment overrides applied.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env()?;
        Ok(config)
    }

    /// Applies overrides from the process environment.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|var| std::env::var(var).ok())
    }

    /// Applies overrides from an arbitrary variable lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(root) = lookup(ENV_CVE_ROOT).filter(|v| !v.trim().is_empty()) {
            self.cve_root = PathBuf::from(root);
        }
        if let Some(custom) = lookup(ENV_CUSTOM_LOCATION) {
            self.custom_location = if custom.trim().is_empty() {
                None
            } else {
                Some(PathBuf::from(custom))
            };
        }
        if let Some(raw) = lookup(ENV_VALIDATION_AS_ERRORS) {
            self.validation_as_errors =
                xs::parse_boolean(&raw).ok_or_else(|| ConfigError::InvalidValue {
                    var: ENV_VALIDATION_AS_ERRORS.to_string(),
                    value: raw.clone(),
                })?;
        }
        Ok(())
    }

    /// The resource directory settings this config describes.
    pub fn locations(&self) -> ResourceLocations {
        ResourceLocations {
            root: self.cve_root.clone(),
            custom: self.custom_location.clone(),
            per_version: self.version_locations.clone(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The config file is not valid YAML for `IsmConfig`.
    #[error("failed to parse config {path}: {source}")]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// An environment override has an unusable value.
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: String, value: String },
}
