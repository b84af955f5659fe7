use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_collection() -> String {
    "wordLearningStatus".to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Memory,
    #[default]
    Json,
}

impl std::str::FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreBackend::Memory),
            "json" => Ok(StoreBackend::Json),
            other => Err(format!("unknown store backend '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// Directory holding one JSON file per collection
    pub data_dir: PathBuf,
    #[serde(default = "default_collection")]
    pub collection: String,
}

impl StoreConfig {
    pub fn new() -> Self {
        let backend = env::var("STORE_BACKEND")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));

        Self {
            backend,
            data_dir,
            collection: default_collection(),
        }
    }

    pub fn collection_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", self.collection))
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new()
    }
}
