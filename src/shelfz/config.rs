use crate::error::{Result, ShelfzError};
use crate::model::SortBy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Application configuration, stored as config.json next to the catalog.
/// Saved wholesale on every change; there is no partial merge.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Credential for the metadata lookup service. Empty means lookups are
    /// attempted without a key.
    pub api_key: String,

    /// Persisted sort preference for shelf views.
    pub sort_by: SortBy,
}

impl AppConfig {
    /// Load config from the given directory, or return defaults if missing.
    /// An unparseable file also yields defaults; the file is left untouched.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShelfzError::Io)?;
        Ok(serde_json::from_str(&content).unwrap_or_default())
    }

    /// Save config to the given directory, creating it if needed.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShelfzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShelfzError::Serialization)?;
        fs::write(config_path, content).map_err(ShelfzError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "api-key" => Some(self.api_key.clone()),
            "sort" => Some(self.sort_by.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "api-key" => {
                self.api_key = value.to_string();
                Ok(())
            }
            "sort" => {
                self.sort_by = value.parse()?;
                Ok(())
            }
            other => Err(format!("Unknown config key: {}", other)),
        }
    }
}
