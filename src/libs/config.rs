//! User configuration stored as `config.json` in the data directory.
//!
//! The file is optional. Missing files and missing fields fall back to
//! [`Config::default`]:
//!
//! ```json
//! {
//!   "date_format": "%d/%m/%Y"
//! }
//! ```

use crate::libs::messages::Message;
use crate::msg_warning;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "config.json";

pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// `chrono` format string for the CREATED column of `tsk list`.
    pub date_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl Config {
    /// Reads the configuration from `dir`. A missing file yields the defaults;
    /// a malformed one is an error.
    pub fn read(dir: &Path) -> Result<Config> {
        let config_file_path = dir.join(CONFIG_FILE_NAME);
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Like [`Config::read`], but warns and falls back to the defaults when the
    /// file cannot be parsed.
    pub fn load_or_default(dir: &Path) -> Config {
        Config::read(dir).unwrap_or_else(|error| {
            msg_warning!(Message::ConfigParseError(error.to_string()));
            Config::default()
        })
    }

    pub fn save(&self, dir: &Path) -> Result<()> {
        let config_file = File::create(dir.join(CONFIG_FILE_NAME))?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }
}
