use speaknest_types::{AppEvent, Difficulty};

use crate::events::display_review;
use crate::state::AppState;

pub async fn handle_rating(
    state: &AppState,
    user_id: &str,
    word_id: &str,
    difficulty: Difficulty,
) -> anyhow::Result<AppEvent> {
    if !state.catalog.is_empty() && state.catalog.word(word_id).is_none() {
        tracing::warn!("Rating {} which is not in the word catalog", word_id);
    }

    let review = state
        .scheduler
        .record_assessment(user_id, word_id, difficulty)
        .await?;

    let due = review.is_due(state.scheduler.now());
    Ok(AppEvent::ReviewRecorded(display_review(&state.catalog, &review, due)))
}
