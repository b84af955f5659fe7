use speaknest_core::policy;
use speaknest_types::{AppEvent, Difficulty, IntervalPreview};

use crate::state::AppState;

pub fn handle_preview(state: &AppState) -> AppEvent {
    let previews = Difficulty::ALL
        .into_iter()
        .map(|difficulty| IntervalPreview {
            difficulty,
            next_review: state.scheduler.preview_next_review(difficulty),
            label: policy::format_interval(policy::interval_days(difficulty)),
        })
        .collect();

    AppEvent::ShowPreview(previews)
}
