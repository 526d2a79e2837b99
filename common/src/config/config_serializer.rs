use serde::Serialize;
use serde::de::DeserializeOwned;

pub fn serialize_yaml<T: Serialize>(config: &T) -> Result<String, String> {
    serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to serialize config: {}", e))
}

pub fn deserialize_yaml<T: DeserializeOwned>(content: &str) -> Result<T, String> {
    serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize config: {}", e))
}
