use crate::error::{Result, ShelfError};
use crate::store::DEFAULT_SLOT;
use crate::view::DEFAULT_NOTICE_SECS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Slot files share the data directory with `config.json`, so this name is taken.
const RESERVED_SLOT: &str = "config";

/// Keys accepted by [`ShelfConfig::get`] and [`ShelfConfig::set`], in display order.
pub const CONFIG_KEYS: [&str; 2] = ["slot", "notice-secs"];

/// Configuration for bookshelf, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Name of the slot holding the collection
    #[serde(default = "default_slot")]
    pub slot: String,

    /// How long a notification banner stays up, in seconds
    #[serde(default = "default_notice_secs")]
    pub notice_secs: u64,
}

fn default_slot() -> String {
    DEFAULT_SLOT.to_string()
}

fn default_notice_secs() -> u64 {
    DEFAULT_NOTICE_SECS
}

/// Slot names become file names: letters, digits, '-' or '_', and never the
/// config file's own name.
pub fn check_slot(slot: &str) -> Result<()> {
    if slot.is_empty()
        || !slot
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ShelfError::Config(format!(
            "Invalid slot name '{}': use letters, digits, '-' or '_'",
            slot
        )));
    }
    if slot.eq_ignore_ascii_case(RESERVED_SLOT) {
        return Err(ShelfError::Config(format!(
            "Slot name '{}' is reserved for the configuration file",
            slot
        )));
    }
    Ok(())
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            slot: default_slot(),
            notice_secs: default_notice_secs(),
        }
    }
}

impl ShelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShelfError::Io)?;
        let config: ShelfConfig =
            serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShelfError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShelfError::Serialization)?;
        fs::write(config_path, content).map_err(ShelfError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "slot" => Some(self.slot.clone()),
            "notice-secs" => Some(self.notice_secs.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "slot" => {
                let slot = value.trim();
                check_slot(slot)?;
                self.slot = slot.to_string();
            }
            "notice-secs" => {
                self.notice_secs = value.trim().parse().map_err(|_| {
                    ShelfError::Config(format!(
                        "Invalid notice-secs '{}': expected a whole number of seconds",
                        value
                    ))
                })?;
            }
            other => {
                return Err(ShelfError::Config(format!("Unknown config key: {}", other)));
            }
        }
        Ok(())
    }
}
