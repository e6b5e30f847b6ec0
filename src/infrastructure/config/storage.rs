//! Config file discovery and loading.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{info, warn};

use super::app_config::AppConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no --config given and no home directory to place one in")]
    NoConfigPath,
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot encode default config: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// The TOML file the dashboard reads its settings from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Picks the `--config` override when present, else the per-user default.
    ///
    /// # Errors
    /// Returns [`ConfigError::NoConfigPath`] when there is no override and
    /// the platform has no config directory.
    pub fn resolve(override_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        override_path
            .or_else(AppConfig::default_config_path)
            .map(Self::new)
            .ok_or(ConfigError::NoConfigPath)
    }

    /// Reads the settings.
    ///
    /// A missing file is created with the defaults. A file that does not
    /// parse is left alone and the defaults are used.
    ///
    /// # Errors
    /// Returns `ConfigError` if the file exists but cannot be read, or the
    /// default file cannot be written.
    pub fn load(&self) -> Result<AppConfig, ConfigError> {
        let mut config = match fs::read_to_string(&self.path) {
            Ok(content) => toml::from_str(&content).unwrap_or_else(|e| {
                warn!(path = %self.path.display(), error = %e, "Malformed config, using defaults");
                AppConfig::default()
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let config = AppConfig::default();
                self.write_default(&config)?;
                info!(path = %self.path.display(), "Created default config");
                config
            }
            Err(source) => return Err(self.io_error(source)),
        };

        config.config = Some(self.path.clone());
        Ok(config)
    }

    fn write_default(&self, config: &AppConfig) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(config)?;
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| self.io_error(e))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| self.io_error(e))?;
        tmp.persist(&self.path).map_err(|e| self.io_error(e.error))?;
        Ok(())
    }

    fn io_error(&self, source: io::Error) -> ConfigError {
        ConfigError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
