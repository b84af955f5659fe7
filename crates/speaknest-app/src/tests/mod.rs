use std::sync::Arc;

use chrono::{DateTime, Utc};
use speaknest_config::{Config, StoreBackend};
use speaknest_core::{ManualClock, MemoryStore, ReviewCache, ReviewScheduler, VocabularyCatalog};
use speaknest_meeting::MeetingService;
use speaknest_types::ReviewCountPolicy;

use crate::state::AppState;

mod sync_channel_tests;

const CATALOG: &str = r#"{
    "groups": [{ "id": "fruits", "title": "Fruits", "level": "A1" }],
    "words": [{ "id": "apple", "groupId": "fruits", "english": "apple", "turkish": "elma" }]
}"#;

pub(super) fn t0() -> DateTime<Utc> {
    "2024-05-01T09:00:00Z".parse().unwrap()
}

pub(super) fn test_state(meetings: Option<MeetingService>) -> (Arc<AppState>, Arc<ManualClock>) {
    let mut config = Config::new();
    config.store.backend = StoreBackend::Memory;

    let clock = Arc::new(ManualClock::new(t0()));
    let scheduler = ReviewScheduler::new(
        Arc::new(MemoryStore::new("wordLearningStatus")),
        clock.clone(),
        Arc::new(ReviewCache::new()),
        ReviewCountPolicy::Reset,
    );
    let catalog = VocabularyCatalog::from_json_str(CATALOG).unwrap();

    let state = AppState::with_parts(config, scheduler, catalog, meetings);
    (Arc::new(state), clock)
}
