//! JSON config-file adapter.
//!
//! Implements [`ConfigPort`] over a single JSON document. The path comes
//! from the `LEDBRIDGE_CONFIG` environment variable; with no variable
//! set there is nothing to load and the caller runs on defaults.

use std::path::{Path, PathBuf};

use log::info;

use crate::app::ports::{ConfigError, ConfigPort};
use crate::config::IndicatorConfig;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "LEDBRIDGE_CONFIG";

#[derive(Debug, Clone, Default)]
pub struct JsonConfigFile {
    path: Option<PathBuf>,
}

impl JsonConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Path from [`CONFIG_ENV`], if set and non-empty.
    pub fn from_env() -> Self {
        Self {
            path: std::env::var_os(CONFIG_ENV)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl ConfigPort for JsonConfigFile {
    fn load(&self) -> Result<IndicatorConfig, ConfigError> {
        let path = self.path.as_deref().ok_or(ConfigError::NotFound)?;
        let raw = match std::fs::read(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ConfigError::NotFound);
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };
        let config: IndicatorConfig =
            serde_json::from_slice(&raw).map_err(ConfigError::Corrupted)?;
        config.validate().map_err(ConfigError::ValidationFailed)?;
        info!("Config loaded from {}", path.display());
        Ok(config)
    }
}
