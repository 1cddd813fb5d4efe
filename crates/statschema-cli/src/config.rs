//! Optional TOML configuration.
//!
//! ```toml
//! steam_path = "C:/Program Files (x86)/Steam"
//! output_dir = "D:/achievement_data"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Game client install root; registry lookup is used when unset
    pub steam_path: Option<PathBuf>,
    /// Directory receiving `<app_id>.json` achievement data
    pub output_dir: Option<PathBuf>,
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("statschema").join("config.toml"))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `path`, or the default location when `None`.
    ///
    /// A missing default file is not an error. Any other failure falls back
    /// to defaults with a warning.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let (path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => match Self::default_path() {
                Some(path) => (path, false),
                None => return Self::default(),
            },
        };

        if !explicit && !path.exists() {
            return Self::default();
        }

        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{:#}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Configured output directory, or `<data dir>/statschema/achievement_data`
    pub fn output_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.output_dir {
            return Ok(dir.clone());
        }
        let data_dir = dirs::data_dir().context("Failed to determine data directory")?;
        Ok(data_dir.join("statschema").join("achievement_data"))
    }
}

/// File name of the exported achievement data for `app_id`
pub fn achievement_data_file_name(app_id: u32) -> String {
    format!("{}_achievement_data.json", app_id)
}
