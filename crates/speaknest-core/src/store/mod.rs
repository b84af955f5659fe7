use async_trait::async_trait;
use speaknest_types::ReviewState;

use crate::error::StoreError;

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Document collection holding review states, keyed by `"{userId}_{wordId}"`
#[async_trait]
pub trait ReviewStore: Send + Sync {
    /// Insert or fully replace the record under `key`
    async fn put(&self, key: &str, state: &ReviewState) -> Result<(), StoreError>;

    /// All records of a learner, ascending by `next_review`
    async fn query(&self, user_id: &str) -> Result<Vec<ReviewState>, StoreError>;

    /// Collection name, for logs
    fn collection(&self) -> &str;
}

pub(crate) fn sorted_for_user<'a>(
    states: impl Iterator<Item = &'a ReviewState>,
    user_id: &str,
) -> Vec<ReviewState> {
    let mut rows: Vec<ReviewState> = states.filter(|s| s.user_id == user_id).cloned().collect();
    rows.sort_by(|a, b| {
        a.next_review
            .cmp(&b.next_review)
            .then_with(|| a.word_id.cmp(&b.word_id))
    });
    rows
}
