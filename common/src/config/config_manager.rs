use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use std::sync::Mutex;

use super::config_serializer::{deserialize_yaml, serialize_yaml};
use super::config_store::{ConfigStore, FileConfigStore};
use super::Validate;

pub struct ConfigManager<TStore, TConfig>
where
    TStore: ConfigStore,
{
    store: TStore,
    config: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileConfigStore, TConfig> {
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Self {
        Self::new(FileConfigStore::new(path))
    }
}

impl<TStore, TConfig> ConfigManager<TStore, TConfig>
where
    TStore: ConfigStore,
{
    pub fn new(store: TStore) -> Self {
        Self {
            store,
            config: Mutex::new(None),
        }
    }

    pub fn store(&self) -> &TStore {
        &self.store
    }
}

impl<TStore, TConfig> ConfigManager<TStore, TConfig>
where
    TStore: ConfigStore,
    TConfig: Clone + DeserializeOwned + Serialize + Validate + Default,
{
    /// Loads and validates the stored config once, then serves the cached
    /// copy. An empty store yields `TConfig::default()` without caching it.
    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self
            .config
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())?;

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(content) = self.store.load()? else {
            return Ok(TConfig::default());
        };

        let config: TConfig = deserialize_yaml(&content)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let content = serialize_yaml(config)?;
        self.store.save(&content)?;

        let mut current = self
            .config
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())?;
        *current = Some(config.clone());
        Ok(())
    }
}
