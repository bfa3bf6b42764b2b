//! Feedback data file configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Location of the persisted feedback array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the JSON file, relative paths resolve against the working directory.
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

impl StorageConfig {
    /// The data file as a filesystem path.
    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(&self.data_file)
    }
}

fn default_data_file() -> String {
    "./data/feedback.json".to_string()
}
