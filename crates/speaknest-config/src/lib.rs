use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use self::meeting::MeetingConfig;
use self::review::ReviewConfig;
use self::store::StoreConfig;

pub mod meeting;
pub mod review;
pub mod store;

pub use store::StoreBackend;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub review: ReviewConfig,
    pub store: StoreConfig,
    pub meeting: MeetingConfig,

    /// Word groups and words shown next to review items
    pub catalog_path: Option<PathBuf>,
    /// Capacity of the app <-> ui event channels
    pub channel_capacity: usize,
    /// Emit logs as JSON lines. Read from `LOG_FORMAT` only, since logging
    /// starts before any profile is loaded.
    #[serde(skip)]
    pub log_json: bool,
}

impl Config {
    pub fn new() -> Self {
        let catalog_path = env::var("CATALOG_PATH").ok().map(PathBuf::from);

        let channel_capacity = env::var("CHANNEL_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(64);

        let log_json = env::var("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Config {
            review: ReviewConfig::new(),
            store: StoreConfig::new(),
            meeting: MeetingConfig::new(),

            catalog_path,
            channel_capacity,
            log_json,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
