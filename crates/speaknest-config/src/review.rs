use std::env;

use serde::{Deserialize, Serialize};
use speaknest_types::ReviewCountPolicy;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    /// What happens to `review_count` when a word is rated again
    pub count_policy: ReviewCountPolicy,
}

impl ReviewConfig {
    pub fn new() -> Self {
        let count_policy = env::var("REVIEW_COUNT_POLICY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        Self { count_policy }
    }
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self::new()
    }
}
