//! Application configuration.

use crate::consts::cli_consts::{CONFIG_DIR, CONFIG_FILE, DEFAULT_LOAD_DELAY_MS, LOG_FILE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{fs, io};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Latency of the simulated data source, in milliseconds.
    pub load_delay_ms: u64,
    /// Paint a dark background behind the dashboard.
    pub with_background_color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            load_delay_ms: DEFAULT_LOAD_DELAY_MS,
            with_background_color: false,
        }
    }
}

/// `$HOME/.finance-dashboard`
pub fn get_config_dir() -> Result<PathBuf, io::Error> {
    let home = home::home_dir().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "Could not determine home directory")
    })?;
    Ok(home.join(CONFIG_DIR))
}

pub fn get_config_path() -> Result<PathBuf, io::Error> {
    Ok(get_config_dir()?.join(CONFIG_FILE))
}

pub fn get_log_path() -> Result<PathBuf, io::Error> {
    Ok(get_config_dir()?.join(LOG_FILE))
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Like [`Config::load_from_file`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, io::Error> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    pub fn save(&self, path: &Path) -> Result<(), io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }
}
