use speaknest_core::{ReviewPartition, VocabularyCatalog};
use speaknest_types::{AppEvent, ReviewBoard};

use crate::events::display_review;
use crate::state::AppState;

/// Due and upcoming reviews of a learner; `refresh` bypasses the cache
pub async fn handle_show_reviews(
    state: &AppState,
    user_id: &str,
    refresh: bool,
) -> anyhow::Result<AppEvent> {
    let scheduler = &state.scheduler;

    let partition = if refresh {
        scheduler.cache().invalidate(user_id).await;
        scheduler.due_reviews(user_id).await?
    } else {
        scheduler.cached_reviews(user_id).await?
    };

    tracing::debug!(
        "{} has {} due and {} upcoming reviews",
        user_id,
        partition.due.len(),
        partition.upcoming.len()
    );

    Ok(AppEvent::ShowReviews(review_board(
        &state.catalog,
        user_id,
        &partition,
    )))
}

/// Board built from a partition; the due flag follows the half an entry is in
fn review_board(
    catalog: &VocabularyCatalog,
    user_id: &str,
    partition: &ReviewPartition,
) -> ReviewBoard {
    ReviewBoard {
        user_id: user_id.to_string(),
        due: partition
            .due
            .iter()
            .map(|s| display_review(catalog, s, true))
            .collect(),
        upcoming: partition
            .upcoming
            .iter()
            .map(|s| display_review(catalog, s, false))
            .collect(),
    }
}
