use std::collections::HashMap;

use speaknest_types::ReviewState;
use tokio::sync::RwLock;

/// Client-side mirror of review states, grouped per learner.
///
/// A learner is "loaded" once `replace_user` has been called for them and
/// until they are invalidated. Single upserts don't mark a learner loaded.
#[derive(Default)]
pub struct ReviewCache {
    users: RwLock<HashMap<String, UserEntry>>,
}

#[derive(Default)]
struct UserEntry {
    loaded: bool,
    words: HashMap<String, ReviewState>,
}

impl ReviewCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace everything cached for `user_id` with a fresh store read
    pub async fn replace_user(&self, user_id: &str, states: &[ReviewState]) {
        let words = states
            .iter()
            .filter(|s| s.user_id == user_id)
            .map(|s| (s.word_id.clone(), s.clone()))
            .collect();

        self.users
            .write()
            .await
            .insert(user_id.to_string(), UserEntry { loaded: true, words });
    }

    /// Insert or replace one state, returning what it replaced
    pub async fn upsert(&self, state: ReviewState) -> Option<ReviewState> {
        let mut users = self.users.write().await;
        let entry = users.entry(state.user_id.clone()).or_default();
        entry.words.insert(state.word_id.clone(), state)
    }

    /// Put back the value returned by `upsert`
    pub async fn restore(&self, user_id: &str, word_id: &str, previous: Option<ReviewState>) {
        let mut users = self.users.write().await;
        let Some(entry) = users.get_mut(user_id) else {
            return;
        };

        match previous {
            Some(state) => {
                entry.words.insert(word_id.to_string(), state);
            }
            None => {
                entry.words.remove(word_id);
            }
        }
    }

    pub async fn get(&self, user_id: &str, word_id: &str) -> Option<ReviewState> {
        self.users
            .read()
            .await
            .get(user_id)
            .and_then(|e| e.words.get(word_id))
            .cloned()
    }

    pub async fn states_for(&self, user_id: &str) -> Vec<ReviewState> {
        self.users
            .read()
            .await
            .get(user_id)
            .map(|e| e.words.values().cloned().collect())
            .unwrap_or_default()
    }

    pub async fn is_loaded(&self, user_id: &str) -> bool {
        self.users
            .read()
            .await
            .get(user_id)
            .is_some_and(|e| e.loaded)
    }

    pub async fn invalidate(&self, user_id: &str) {
        if self.users.write().await.remove(user_id).is_some() {
            tracing::debug!("Invalidated review cache for {}", user_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use speaknest_types::Difficulty;

    use super::*;

    fn state(user: &str, word: &str, difficulty: Difficulty) -> ReviewState {
        let now = Utc::now();
        ReviewState {
            user_id: user.to_string(),
            word_id: word.to_string(),
            difficulty,
            last_reviewed: now,
            next_review: now,
            review_count: 1,
        }
    }

    #[tokio::test]
    async fn test_upsert_and_restore() {
        let cache = ReviewCache::new();
        let first = state("u1", "apple", Difficulty::Easy);

        assert_eq!(cache.upsert(first.clone()).await, None);
        let replaced = cache.upsert(state("u1", "apple", Difficulty::Hard)).await;
        assert_eq!(replaced.as_ref(), Some(&first));

        cache.restore("u1", "apple", replaced).await;
        assert_eq!(cache.get("u1", "apple").await, Some(first));

        cache.restore("u1", "apple", None).await;
        assert_eq!(cache.get("u1", "apple").await, None);
    }

    #[tokio::test]
    async fn test_loaded_and_invalidate() {
        let cache = ReviewCache::new();
        cache.upsert(state("u1", "apple", Difficulty::Easy)).await;
        assert!(!cache.is_loaded("u1").await);

        cache
            .replace_user(
                "u1",
                &[
                    state("u1", "pear", Difficulty::Medium),
                    state("u2", "plum", Difficulty::Hard),
                ],
            )
            .await;
        assert!(cache.is_loaded("u1").await);
        let states = cache.states_for("u1").await;
        assert_eq!(states.len(), 1);
        assert_eq!(states[0].word_id, "pear");

        cache.invalidate("u1").await;
        assert!(!cache.is_loaded("u1").await);
        assert!(cache.states_for("u1").await.is_empty());
    }
}
