use std::collections::HashMap;

use async_trait::async_trait;
use speaknest_types::ReviewState;
use tokio::sync::RwLock;

use super::{ReviewStore, sorted_for_user};
use crate::error::StoreError;

/// Process-local collection, lost on exit
pub struct MemoryStore {
    collection: String,
    rows: RwLock<HashMap<String, ReviewState>>,
}

impl MemoryStore {
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            rows: RwLock::new(HashMap::new()),
        }
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait]
impl ReviewStore for MemoryStore {
    async fn put(&self, key: &str, state: &ReviewState) -> Result<(), StoreError> {
        self.rows.write().await.insert(key.to_string(), state.clone());
        Ok(())
    }

    async fn query(&self, user_id: &str) -> Result<Vec<ReviewState>, StoreError> {
        let rows = self.rows.read().await;
        Ok(sorted_for_user(rows.values(), user_id))
    }

    fn collection(&self) -> &str {
        &self.collection
    }
}
