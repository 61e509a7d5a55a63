use crate::components::partition::Partition;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("{path} is not a valid json file. exit.")]
    InvalidJson { path: String },
    #[error("Invalid json format (should be an array of str). exit")]
    InvalidFormat,
}

/// Reads a JSON array of strings.
pub fn load_text_items<P: AsRef<Path>>(path: P) -> Result<Vec<String>, InputError> {
    let path = path.as_ref();
    let invalid_json = || InputError::InvalidJson {
        path: path.display().to_string(),
    };
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::debug!("Failed to read {}: {e}", path.display());
        invalid_json()
    })?;
    let value: serde_json::Value = serde_json::from_str(&content).map_err(|e| {
        crate::debug!("Failed to parse {}: {e}", path.display());
        invalid_json()
    })?;
    serde_json::from_value(value).map_err(|_| InputError::InvalidFormat)
}

/// Writes `partition` as compact UTF-8 JSON.
pub fn write_partition<P: AsRef<Path>>(path: P, partition: &Partition) -> crate::Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string(partition)?;
    std::fs::write(path, json)
        .map_err(|e| crate::anyhow!("Failed to write {}: {e}", path.display()))
}
