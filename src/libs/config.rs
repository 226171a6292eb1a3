//! Application configuration.
//!
//! Settings are stored as JSON in the platform data directory next to
//! the database. Only presentation defaults live here; session length
//! and persistence behavior are fixed by the domain rules.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Whether `task list` shows completed tasks without `--all`.
    #[serde(default)]
    pub show_completed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config { show_completed: false }
    }
}

impl Config {
    /// Reads the stored configuration, falling back to defaults when no
    /// file exists yet.
    pub fn read() -> Result<Self> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(&path)?;
        let config = serde_json::from_str(&contents).map_err(|_| msg_error_anyhow!(Message::ConfigParseError))?;

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;

        Ok(())
    }

    /// Interactive setup wizard, starting from the current settings.
    pub fn init() -> Result<Self> {
        let current = Config::read().unwrap_or_default();
        let show_completed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Show completed tasks in `task list` by default?")
            .default(current.show_completed)
            .interact()?;

        Ok(Config { show_completed })
    }
}
