//! YAML-backed configuration: a [`ConfigStore`] holds the raw text, a
//! [`ConfigManager`] parses, validates and caches the typed value.

mod config_manager;
mod config_serializer;
mod config_store;

pub use config_manager::ConfigManager;
pub use config_serializer::{deserialize_yaml, serialize_yaml};
pub use config_store::{ConfigStore, FileConfigStore, MemoryConfigStore};

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
