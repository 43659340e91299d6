//! Runtime configuration.
//!
//! # Responsibility
//! - Describe storage location, slot key, logging and editor knobs.
//! - Load settings from an optional JSON file; missing fields use defaults.
//!
//! # Invariants
//! - `storage_key` is never blank.
//! - Menu radii satisfy `0 <= inner < outer`.

use crate::editor::ColorPolicy;
use crate::logging::LogLevel;
use crate::menu::radial::RadialGeometry;
use crate::page::PageOptions;
use crate::repo::note_store::DEFAULT_NOTES_KEY;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Configuration failures.
#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    Invalid(&'static str),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config JSON: {err}"),
            Self::Invalid(reason) => write!(f, "invalid config: {reason}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotewallConfig {
    /// Slot holding the note array.
    pub storage_key: String,
    /// SQLite storage file; `None` keeps notes in memory for the session.
    pub db_path: Option<PathBuf>,
    pub log_level: String,
    /// Absolute log directory; `None` disables file logging.
    pub log_dir: Option<PathBuf>,
    pub color_policy: ColorPolicy,
    pub menu_inner_radius: f64,
    pub menu_outer_radius: f64,
}

impl Default for NotewallConfig {
    fn default() -> Self {
        let geometry = RadialGeometry::default();
        Self {
            storage_key: DEFAULT_NOTES_KEY.to_string(),
            db_path: None,
            log_level: LogLevel::default_for_build().as_str().to_string(),
            log_dir: None,
            color_policy: ColorPolicy::default(),
            menu_inner_radius: geometry.inner_radius,
            menu_outer_radius: geometry.outer_radius,
        }
    }
}

impl NotewallConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("storage_key must not be blank"));
        }
        if LogLevel::parse(&self.log_level).is_none() {
            return Err(ConfigError::Invalid(
                "log_level must be one of trace|debug|info|warn|error",
            ));
        }
        if !(self.menu_inner_radius >= 0.0 && self.menu_inner_radius < self.menu_outer_radius) {
            return Err(ConfigError::Invalid(
                "menu radii must satisfy 0 <= inner < outer",
            ));
        }
        Ok(())
    }

    pub fn menu_geometry(&self) -> RadialGeometry {
        RadialGeometry {
            inner_radius: self.menu_inner_radius,
            outer_radius: self.menu_outer_radius,
        }
    }

    pub fn page_options(&self) -> PageOptions {
        PageOptions {
            color_policy: self.color_policy,
            menu_geometry: self.menu_geometry(),
        }
    }
}
