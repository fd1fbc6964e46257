//! Application settings, read from an optional TOML file.
//!
//! Every key is optional:
//!
//! ```toml
//! catalog_path = "media_data.txt"
//! data_dir = "."
//! export_dir = "."
//! default_min_rating = 0.0
//! default_max_duration = 200
//! cold_start_limit = 5
//! ```

use crate::error::SettingsError;
use pipeline::DEFAULT_COLD_START_LIMIT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "reelshelf.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Catalog file loaded when no path is given
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,

    /// Where `userdata_<username>.txt` files live
    #[serde(default = "default_dir")]
    pub data_dir: PathBuf,

    /// Where reports go when no explicit path is given
    #[serde(default = "default_dir")]
    pub export_dir: PathBuf,

    #[serde(default)]
    pub default_min_rating: f64,

    #[serde(default = "default_max_duration")]
    pub default_max_duration: u32,

    #[serde(default = "default_cold_start_limit")]
    pub cold_start_limit: usize,
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("media_data.txt")
}

fn default_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_max_duration() -> u32 {
    200
}

fn default_cold_start_limit() -> usize {
    DEFAULT_COLD_START_LIMIT
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            data_dir: default_dir(),
            export_dir: default_dir(),
            default_min_rating: 0.0,
            default_max_duration: default_max_duration(),
            cold_start_limit: default_cold_start_limit(),
        }
    }
}

impl Settings {
    /// Load settings.
    ///
    /// With an explicit path the file must exist. Without one,
    /// [`DEFAULT_CONFIG_FILE`] is read if present and defaults are used
    /// otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                match Self::from_file(path) {
                    Err(SettingsError::Read { source, .. })
                        if source.kind() == io::ErrorKind::NotFound =>
                    {
                        debug!("No {} found, using default settings", DEFAULT_CONFIG_FILE);
                        Ok(Self::default())
                    }
                    other => other,
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&content, path)?;
        debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Parse settings text. `path` is only used in error messages.
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, SettingsError> {
        toml::from_str(content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
