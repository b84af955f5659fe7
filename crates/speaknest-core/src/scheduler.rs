use std::sync::Arc;

use chrono::{DateTime, Utc};
use speaknest_types::{Difficulty, KEY_SEPARATOR, ReviewCountPolicy, ReviewState};

use crate::cache::ReviewCache;
use crate::clock::Clock;
use crate::error::ReviewError;
use crate::policy;
use crate::store::ReviewStore;

/// Review states split around a reference time
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewPartition {
    /// `next_review <= now`, oldest first
    pub due: Vec<ReviewState>,
    /// `next_review > now`, soonest first
    pub upcoming: Vec<ReviewState>,
}

impl ReviewPartition {
    /// Due entries followed by upcoming ones
    pub fn ordered(&self) -> impl Iterator<Item = &ReviewState> {
        self.due.iter().chain(self.upcoming.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.due.is_empty() && self.upcoming.is_empty()
    }

    pub fn len(&self) -> usize {
        self.due.len() + self.upcoming.len()
    }
}

/// Split `states` into due and upcoming relative to `now`.
///
/// Both halves are sorted by `next_review`, ties broken by word id so the
/// result only depends on the input set.
pub fn partition_by_due_status(
    states: impl IntoIterator<Item = ReviewState>,
    now: DateTime<Utc>,
) -> ReviewPartition {
    let (mut due, mut upcoming): (Vec<_>, Vec<_>) =
        states.into_iter().partition(|s| s.is_due(now));

    let by_next_review = |a: &ReviewState, b: &ReviewState| {
        a.next_review
            .cmp(&b.next_review)
            .then_with(|| a.word_id.cmp(&b.word_id))
    };
    due.sort_by(by_next_review);
    upcoming.sort_by(by_next_review);

    ReviewPartition { due, upcoming }
}

/// Turns difficulty ratings into review states and keeps the cache in sync
/// with the store.
pub struct ReviewScheduler {
    store: Arc<dyn ReviewStore>,
    clock: Arc<dyn Clock>,
    cache: Arc<ReviewCache>,
    count_policy: ReviewCountPolicy,
}

impl ReviewScheduler {
    pub fn new(
        store: Arc<dyn ReviewStore>,
        clock: Arc<dyn Clock>,
        cache: Arc<ReviewCache>,
        count_policy: ReviewCountPolicy,
    ) -> Self {
        Self {
            store,
            clock,
            cache,
            count_policy,
        }
    }

    pub fn cache(&self) -> &Arc<ReviewCache> {
        &self.cache
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Record a learner's rating of a word and schedule its next review.
    ///
    /// The cache reflects the new state before the store write; if the
    /// write fails the cache is put back and the error returned.
    pub async fn record_assessment(
        &self,
        user_id: &str,
        word_id: &str,
        difficulty: Difficulty,
    ) -> Result<ReviewState, ReviewError> {
        if user_id.trim().is_empty() {
            return Err(ReviewError::EmptyId("user id"));
        }
        if word_id.trim().is_empty() {
            return Err(ReviewError::EmptyId("word id"));
        }
        // keys are "{user}_{word}", split at the first separator
        if user_id.contains(KEY_SEPARATOR) {
            return Err(ReviewError::SeparatorInUserId(user_id.to_string()));
        }

        if self.count_policy == ReviewCountPolicy::Increment && !self.cache.is_loaded(user_id).await
        {
            self.reviews_for(user_id).await?;
        }
        let previous_count = self
            .cache
            .get(user_id, word_id)
            .await
            .map(|s| s.review_count);

        let now = self.clock.now();
        let state = ReviewState {
            user_id: user_id.to_string(),
            word_id: word_id.to_string(),
            difficulty,
            last_reviewed: now,
            next_review: policy::next_review_at(difficulty, now),
            review_count: self.count_policy.next_count(previous_count),
        };

        let replaced = self.cache.upsert(state.clone()).await;

        if let Err(e) = self.store.put(&state.key(), &state).await {
            tracing::error!(
                "Failed to write {} to {}: {}",
                state.key(),
                self.store.collection(),
                e
            );
            self.cache.restore(user_id, word_id, replaced).await;
            return Err(e.into());
        }

        tracing::info!(
            "Rated {} as {} for {}, next review at {}",
            word_id,
            difficulty,
            user_id,
            state.next_review
        );

        Ok(state)
    }

    /// Read a learner's states from the store and refresh their cache entry
    pub async fn reviews_for(&self, user_id: &str) -> Result<Vec<ReviewState>, ReviewError> {
        let states = self.store.query(user_id).await?;
        self.cache.replace_user(user_id, &states).await;
        tracing::debug!("Loaded {} review states for {}", states.len(), user_id);
        Ok(states)
    }

    /// Fresh store read, partitioned at the current time
    pub async fn due_reviews(&self, user_id: &str) -> Result<ReviewPartition, ReviewError> {
        let states = self.reviews_for(user_id).await?;
        Ok(partition_by_due_status(states, self.clock.now()))
    }

    /// Partition from the cache, reading the store only if the learner isn't loaded
    pub async fn cached_reviews(&self, user_id: &str) -> Result<ReviewPartition, ReviewError> {
        let states = if self.cache.is_loaded(user_id).await {
            self.cache.states_for(user_id).await
        } else {
            self.reviews_for(user_id).await?
        };
        Ok(partition_by_due_status(states, self.clock.now()))
    }

    /// When a rating given now would schedule the next review
    pub fn preview_next_review(&self, difficulty: Difficulty) -> DateTime<Utc> {
        policy::next_review_at(difficulty, self.clock.now())
    }
}
