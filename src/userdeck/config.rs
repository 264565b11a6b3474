use crate::error::{Result, UserdeckError};
use crate::id::IdStrategy;
use crate::store::fs_backend::check_key;
use crate::store::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

pub const CONFIG_KEYS: &[&str] = &["storage-key", "id-strategy"];

/// Configuration for userdeck, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserdeckConfig {
    /// Key the user collection is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// How ids for new users are generated
    #[serde(default)]
    pub id_strategy: IdStrategy,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for UserdeckConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            id_strategy: IdStrategy::default(),
        }
    }
}

impl UserdeckConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(UserdeckError::Io)?;
        let config: UserdeckConfig =
            serde_json::from_str(&content).map_err(UserdeckError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(UserdeckError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(UserdeckError::Serialization)?;
        fs::write(config_path, content).map_err(UserdeckError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage-key" => Some(self.storage_key.clone()),
            "id-strategy" => Some(self.id_strategy.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "storage-key" => {
                let value = value.trim();
                check_key(value)?;
                self.storage_key = value.to_string();
            }
            "id-strategy" => {
                self.id_strategy = value.parse().map_err(UserdeckError::Config)?;
            }
            other => {
                return Err(UserdeckError::Config(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }
}
