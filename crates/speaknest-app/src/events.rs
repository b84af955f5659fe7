use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use speaknest_core::VocabularyCatalog;
use speaknest_types::{AppEvent, DisplayReview, ReviewState};
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod catalog;
pub mod meeting;
pub mod preview;
pub mod rate_word;
pub mod show_reviews;

use catalog::{handle_list_groups, handle_list_words};
use meeting::{handle_get_meeting, handle_meeting_creation};
use preview::handle_preview;
use rate_word::handle_rating;
use show_reviews::handle_show_reviews;

/// App's main loop: one response per request, handled in arrival order
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    tracing::info!(
        "[EVENT_LOOP] Starting main loop ({:?} store, {:?} review counts)",
        state.config.store.backend,
        state.config.review.count_policy
    );

    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = ui_to_app_rx.recv() => match event {
                Ok(event) => event,
                Err(_) => {
                    tracing::debug!("[EVENT_LOOP] Request channel closed");
                    break;
                }
            },
        };

        if matches!(event, AppEvent::Shutdown) {
            tracing::info!("[EVENT_LOOP] Shutdown requested");
            break;
        }

        tracing::debug!(
            "[EVENT_LOOP] EVENT RECEIVED: {:?}",
            std::mem::discriminant(&event)
        );

        let Some(response) = handle_events(&state, event).await else {
            continue;
        };
        app_to_ui_tx.send(response).await?;
    }

    Ok(())
}

async fn handle_events(state: &AppState, event: AppEvent) -> Option<AppEvent> {
    let result = match event {
        AppEvent::RateWord {
            user_id,
            word_id,
            difficulty,
        } => handle_rating(state, &user_id, &word_id, difficulty).await,
        AppEvent::ListReviews { user_id } => handle_show_reviews(state, &user_id, false).await,
        AppEvent::RefreshReviews { user_id } => handle_show_reviews(state, &user_id, true).await,
        AppEvent::PreviewIntervals => Ok(handle_preview(state)),
        AppEvent::ListGroups { level } => Ok(handle_list_groups(state, level.as_deref())),
        AppEvent::ListWords { group_id } => handle_list_words(state, &group_id),
        AppEvent::CreateMeeting(draft) => handle_meeting_creation(state, draft).await,
        AppEvent::GetMeeting(id) => handle_get_meeting(state, id).await,
        AppEvent::Shutdown
        | AppEvent::ReviewRecorded(_)
        | AppEvent::ShowReviews(_)
        | AppEvent::ShowPreview(_)
        | AppEvent::ShowGroups(_)
        | AppEvent::ShowWords { .. }
        | AppEvent::MeetingReady(_)
        | AppEvent::Error(_) => {
            // UI-only event, ignore in backend
            return None;
        }
    };

    Some(result.unwrap_or_else(|e| {
        tracing::error!("Request failed: {e:#}");
        AppEvent::Error(format!("{e:#}"))
    }))
}

/// Review state joined with its catalog word for display
pub fn display_review(catalog: &VocabularyCatalog, state: &ReviewState, due: bool) -> DisplayReview {
    let word = catalog.word(&state.word_id);
    DisplayReview {
        word_id: state.word_id.clone(),
        term: word.map(|w| w.english.clone()),
        translation: word.map(|w| w.turkish.clone()),
        difficulty: state.difficulty,
        next_review: state.next_review,
        review_count: state.review_count,
        due,
    }
}
