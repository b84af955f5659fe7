use std::sync::Arc;

use anyhow::Context;
use speaknest_config::{Config, StoreBackend};
use speaknest_core::{
    JsonFileStore, MemoryStore, ReviewCache, ReviewScheduler, ReviewStore, SystemClock,
    VocabularyCatalog,
};
use speaknest_meeting::{MeetingService, ZoomMeetingClient, ZoomTokenProvider};

pub struct AppState {
    pub config: Config,
    pub scheduler: ReviewScheduler,
    pub catalog: VocabularyCatalog,
    /// None when no meeting provider credentials are configured
    pub meetings: Option<MeetingService>,
}

impl AppState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store: Arc<dyn ReviewStore> = match config.store.backend {
            StoreBackend::Memory => {
                tracing::warn!("Using in-memory review store, ratings are lost on exit");
                Arc::new(MemoryStore::new(config.store.collection.clone()))
            }
            StoreBackend::Json => {
                let path = config.store.collection_path();
                let store = JsonFileStore::open(&path)
                    .await
                    .with_context(|| format!("Failed to open review store {}", path.display()))?;
                Arc::new(store)
            }
        };

        let scheduler = ReviewScheduler::new(
            store,
            Arc::new(SystemClock),
            Arc::new(ReviewCache::new()),
            config.review.count_policy,
        );

        let catalog = match &config.catalog_path {
            Some(path) => VocabularyCatalog::load(path)
                .with_context(|| format!("Failed to load word catalog {}", path.display()))?,
            None => {
                tracing::warn!("No word catalog configured, reviews show word ids only");
                VocabularyCatalog::default()
            }
        };

        let meetings = if config.meeting.has_credentials() {
            let tokens = Arc::new(ZoomTokenProvider::from_config(&config.meeting)?);
            let client = Arc::new(ZoomMeetingClient::from_config(&config.meeting, tokens)?);
            Some(MeetingService::from_config(client, &config.meeting))
        } else {
            tracing::warn!("Meeting integration disabled");
            None
        };

        Ok(Self::with_parts(config, scheduler, catalog, meetings))
    }

    pub fn with_parts(
        config: Config,
        scheduler: ReviewScheduler,
        catalog: VocabularyCatalog,
        meetings: Option<MeetingService>,
    ) -> Self {
        Self {
            config,
            scheduler,
            catalog,
            meetings,
        }
    }
}
